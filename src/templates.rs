//! Embedded project templates.

/// Static template text, one per generated file.
pub mod project_templates {
    pub static README: &str = include_str!("templates/README.md.tmpl");
    pub static REQUIREMENTS: &str = include_str!("templates/requirements.txt.tmpl");
    pub static SETUP_SCRIPT: &str = include_str!("templates/setup_env.sh.tmpl");
    pub static MAIN_ENTRY: &str = include_str!("templates/main.py.tmpl");
    pub static IGNORE: &str = include_str!("templates/gitignore.tmpl");
}

/// Logical names for the embedded templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Readme,
    Requirements,
    SetupScript,
    MainEntry,
    Ignore,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 5] = [
        TemplateKind::Readme,
        TemplateKind::Requirements,
        TemplateKind::SetupScript,
        TemplateKind::MainEntry,
        TemplateKind::Ignore,
    ];
}

/// Get the template text for a logical name.
pub fn template(kind: TemplateKind) -> &'static str {
    match kind {
        TemplateKind::Readme => project_templates::README,
        TemplateKind::Requirements => project_templates::REQUIREMENTS,
        TemplateKind::SetupScript => project_templates::SETUP_SCRIPT,
        TemplateKind::MainEntry => project_templates::MAIN_ENTRY,
        TemplateKind::Ignore => project_templates::IGNORE,
    }
}
