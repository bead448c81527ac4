//! Documentation source tree: page discovery, loading and site builds.

pub mod build;
pub mod discovery;
pub mod repository;

pub use build::{BuildError, BuildReport, build_site};
pub use discovery::{PageDiscoveryError, PageInfo, discover_pages, is_page_file};
pub use repository::{LoadedPage, PageRepoError, PageRepository};
