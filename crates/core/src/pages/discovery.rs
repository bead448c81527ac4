use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Relative path without the `.md` extension, `/`-separated.
    pub logical_name: String,
    pub path: PathBuf,
    /// Path relative to the docs root.
    pub relative: PathBuf,
}

#[derive(Debug, Error)]
pub enum PageDiscoveryError {
    #[error("docs directory does not exist: {0}")]
    MissingDir(String),

    #[error("failed to read docs directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Find every Markdown page under `root`, sorted by logical name.
pub fn discover_pages(root: &Path) -> Result<Vec<PageInfo>, PageDiscoveryError> {
    let root = root
        .canonicalize()
        .map_err(|_| PageDiscoveryError::MissingDir(root.display().to_string()))?;

    let mut out = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry =
            entry.map_err(|e| PageDiscoveryError::WalkError(root.display().to_string(), e))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_page_file(path) {
            continue;
        }

        let rel = path.strip_prefix(&root).unwrap_or(path);
        out.push(PageInfo {
            logical_name: logical_name_from_relative(rel),
            path: path.to_path_buf(),
            relative: rel.to_path_buf(),
        });
    }

    out.sort_by(|a, b| a.logical_name.cmp(&b.logical_name));
    Ok(out)
}

/// Markdown pages are `*.md`, matched case-insensitively.
pub fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

fn logical_name_from_relative(rel: &Path) -> String {
    let without_ext = rel.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
