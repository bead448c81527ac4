use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::discovery::{PageDiscoveryError, PageInfo, discover_pages};

#[derive(Debug, Error)]
pub enum PageRepoError {
    #[error(transparent)]
    Discovery(#[from] PageDiscoveryError),

    #[error("page not found: {0}")]
    NotFound(String),

    #[error("failed to read page {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct LoadedPage {
    pub info: PageInfo,
    pub content: String,
}

pub struct PageRepository {
    pub root: PathBuf,
    pub pages: Vec<PageInfo>,
}

impl PageRepository {
    pub fn new(root: &Path) -> Result<Self, PageDiscoveryError> {
        let pages = discover_pages(root)?;
        Ok(Self { root: root.to_path_buf(), pages })
    }

    pub fn list_all(&self) -> &[PageInfo] {
        &self.pages
    }

    pub fn get_by_name(&self, name: &str) -> Result<LoadedPage, PageRepoError> {
        let info = self
            .pages
            .iter()
            .find(|p| p.logical_name == name)
            .ok_or_else(|| PageRepoError::NotFound(name.to_string()))?;
        Self::load(info)
    }

    pub fn load(info: &PageInfo) -> Result<LoadedPage, PageRepoError> {
        let content = fs::read_to_string(&info.path)
            .map_err(|e| PageRepoError::Io { path: info.path.clone(), source: e })?;
        Ok(LoadedPage { info: info.clone(), content })
    }
}
