use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fastapi_init::{AppError, NewOptions, PythonVersion};

#[derive(Parser)]
#[command(name = "fastapi-init")]
#[command(version)]
#[command(
    about = "Scaffold a FastAPI project skeleton with pinned dependencies",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a project archive; prompts for anything not given as a flag
    #[clap(visible_alias = "n")]
    New {
        /// Project name (omit to run interactively)
        #[arg(short, long)]
        name: Option<String>,
        /// Project description
        #[arg(short, long)]
        description: Option<String>,
        /// Python version: 3.9, 3.10, 3.11, 3.12, or 3.13
        #[arg(short, long)]
        python: Option<PythonVersion>,
        /// Dependency as 'name' (latest) or 'name==version'; repeatable
        #[arg(short = 'P', long = "package")]
        packages: Vec<String>,
        /// Directory the zip archive is written into
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip the seeded fastapi and uvicorn defaults
        #[arg(long)]
        no_defaults: bool,
    },
    /// Look up a package on PyPI and list its recent versions
    #[clap(visible_alias = "s")]
    Search {
        /// Package name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::New { name, description, python, packages, output, no_defaults } => {
            let options = NewOptions { name, description, python, packages, output, no_defaults };
            fastapi_init::create_project(options).map(|_| ())
        }
        Commands::Search { name } => fastapi_init::search_package(&name).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
