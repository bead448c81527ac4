use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::badge::RELEASES_URL;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub expand: ExpandConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub project_root: String,
    pub docs_dir: String,
    pub output_dir: String,
    /// Release listing linked from version badges.
    #[serde(default)]
    pub releases_url: Option<String>,
}

/// Options for the macro expander.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Leave fenced and indented code blocks untouched (default: true)
    #[serde(default = "default_true")]
    pub skip_code_blocks: bool,
    /// Fail the page when a known macro returns an error (default: true)
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self { skip_code_blocks: true, strict: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub project_root: PathBuf,
    pub docs_dir: PathBuf,
    pub output_dir: PathBuf,
    pub releases_url: String,
    pub expand: ExpandConfig,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Settings used when no config file is available: everything relative
    /// to the current directory, default releases URL.
    pub fn fallback() -> Self {
        Self {
            active_profile: "default".to_string(),
            project_root: PathBuf::from("."),
            docs_dir: PathBuf::from("docs"),
            output_dir: PathBuf::from("site-src"),
            releases_url: RELEASES_URL.to_string(),
            expand: ExpandConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
