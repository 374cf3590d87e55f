mod package_index;

pub use package_index::{MockPackageIndex, PackageIndex};
