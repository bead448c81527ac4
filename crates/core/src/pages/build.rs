//! Expand a whole docs tree into an output tree.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::expand::{Diagnostic, ExpandError, Expander};

use super::discovery::{PageDiscoveryError, is_page_file};

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Discovery(#[from] PageDiscoveryError),

    #[error("output directory must differ from docs directory: {0}")]
    SameDir(PathBuf),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Expand {
        path: PathBuf,
        #[source]
        source: ExpandError,
    },
}

/// Outcome of a site build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: usize,
    pub assets: usize,
    pub expanded: usize,
    /// Placeholders left in place, keyed by path relative to the docs root.
    pub diagnostics: Vec<(PathBuf, Diagnostic)>,
}

/// Expand every Markdown page under `docs_dir` into `output_dir`, keeping
/// relative paths. Other files are copied unchanged. When `output_dir` lies
/// inside `docs_dir` it is excluded from the walk.
pub fn build_site(
    docs_dir: &Path,
    output_dir: &Path,
    expander: &Expander<'_>,
) -> Result<BuildReport, BuildError> {
    let docs = docs_dir
        .canonicalize()
        .map_err(|_| PageDiscoveryError::MissingDir(docs_dir.display().to_string()))?;

    fs::create_dir_all(output_dir)
        .map_err(|e| BuildError::Io { path: output_dir.to_path_buf(), source: e })?;
    let output = output_dir
        .canonicalize()
        .map_err(|e| BuildError::Io { path: output_dir.to_path_buf(), source: e })?;

    if output == docs {
        return Err(BuildError::SameDir(output));
    }

    info!(docs = %docs.display(), output = %output.display(), "building site");

    let mut report = BuildReport::default();
    let walker = WalkDir::new(&docs).into_iter().filter_entry(|e| e.path() != output);

    for entry in walker {
        let entry =
            entry.map_err(|e| PageDiscoveryError::WalkError(docs.display().to_string(), e))?;
        let path = entry.path();
        let rel = path.strip_prefix(&docs).unwrap_or(path);
        let target = output.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| BuildError::Io { path: target.clone(), source: e })?;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        if is_page_file(path) {
            let content = fs::read_to_string(path)
                .map_err(|e| BuildError::Io { path: path.to_path_buf(), source: e })?;
            let expansion = expander
                .expand_page(&content)
                .map_err(|e| BuildError::Expand { path: rel.to_path_buf(), source: e })?;

            fs::write(&target, &expansion.content)
                .map_err(|e| BuildError::Io { path: target.clone(), source: e })?;

            debug!(page = %rel.display(), expanded = expansion.expanded, "wrote page");
            report.pages += 1;
            report.expanded += expansion.expanded;
            report
                .diagnostics
                .extend(expansion.diagnostics.into_iter().map(|d| (rel.to_path_buf(), d)));
        } else {
            fs::copy(path, &target)
                .map_err(|e| BuildError::Io { path: target.clone(), source: e })?;
            report.assets += 1;
        }
    }

    info!(
        pages = report.pages,
        assets = report.assets,
        expanded = report.expanded,
        "site build finished"
    );
    Ok(report)
}
