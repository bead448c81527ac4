//! Frontmatter types and data structures.

use serde::Deserialize;
use serde_yaml::Value;
use std::collections::HashMap;

/// Fields of page frontmatter that affect macro expansion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageFrontmatter {
    /// Set to `false` to pass the page through unexpanded.
    #[serde(default)]
    pub render_macros: Option<bool>,

    /// Everything else, untouched.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl PageFrontmatter {
    pub fn renders_macros(&self) -> bool {
        self.render_macros.unwrap_or(true)
    }
}

/// A page split into its frontmatter block and body.
///
/// `raw_frontmatter` followed by `body` reproduces the original content.
#[derive(Debug, Clone)]
pub struct PageDocument {
    /// The frontmatter block including both `---` lines.
    pub raw_frontmatter: Option<String>,
    /// Parsed frontmatter (if present).
    pub frontmatter: Option<PageFrontmatter>,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}

impl PageDocument {
    pub fn renders_macros(&self) -> bool {
        self.frontmatter.as_ref().is_none_or(PageFrontmatter::renders_macros)
    }
}
