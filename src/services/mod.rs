mod archive;
mod pypi_client_http;

pub use archive::{build_archive, write_archive};
pub use pypi_client_http::{HttpPackageIndex, PypiConfig};
