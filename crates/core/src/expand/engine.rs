use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::types::ExpandConfig;
use crate::frontmatter::{FrontmatterParseError, split};
use crate::macros::{MacroError, MacroRegistry, parse_call};

use super::code_regions::{code_block_ranges, overlaps};

/// Everything between `{{` and `}}` without nested braces.
static PLACEHOLDER_RE: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"\{\{([^{}]+)\}\}"));

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("invalid regex for macro placeholder: {0}")]
    Regex(String),

    #[error("line {line}: {placeholder}: {source}")]
    Macro {
        placeholder: String,
        line: usize,
        #[source]
        source: MacroError,
    },

    #[error(transparent)]
    Frontmatter(#[from] FrontmatterParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    pub skip_code_blocks: bool,
    pub strict: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self { skip_code_blocks: true, strict: true }
    }
}

impl From<&ExpandConfig> for ExpandOptions {
    fn from(cfg: &ExpandConfig) -> Self {
        Self { skip_code_blocks: cfg.skip_code_blocks, strict: cfg.strict }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The expression is not a macro call; left for other template layers.
    NotACall,
    /// Well-formed call to a macro nobody registered.
    UnknownMacro,
    /// The macro returned an error (lenient mode only).
    MacroFailed,
}

/// A placeholder that was left in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub placeholder: String,
    /// 1-based line of the opening `{{`.
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    pub content: String,
    /// Number of placeholders replaced.
    pub expanded: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Replaces `{{ macro(args) }}` placeholders using a [`MacroRegistry`].
pub struct Expander<'a> {
    registry: &'a MacroRegistry,
    options: ExpandOptions,
}

impl<'a> Expander<'a> {
    pub fn new(registry: &'a MacroRegistry, options: ExpandOptions) -> Self {
        Self { registry, options }
    }

    pub fn options(&self) -> ExpandOptions {
        self.options
    }

    /// Expand a full page: frontmatter is kept verbatim and honoured for
    /// `render_macros: false`; the body is expanded.
    pub fn expand_page(&self, content: &str) -> Result<Expansion, ExpandError> {
        let doc = split(content)?;
        if !doc.renders_macros() {
            debug!("render_macros disabled by frontmatter");
            return Ok(Expansion {
                content: content.to_string(),
                expanded: 0,
                diagnostics: Vec::new(),
            });
        }

        let Some(raw_frontmatter) = doc.raw_frontmatter else {
            return self.expand(content);
        };

        let line_offset = raw_frontmatter.matches('\n').count();
        let mut expansion =
            self.expand(&doc.body).map_err(|e| shift_error_line(e, line_offset))?;
        for d in &mut expansion.diagnostics {
            d.line += line_offset;
        }
        expansion.content.insert_str(0, &raw_frontmatter);
        Ok(expansion)
    }

    /// Expand every macro placeholder in `text`.
    ///
    /// Placeholders that are not macro calls, or that name unknown macros,
    /// are left intact and reported as diagnostics.
    pub fn expand(&self, text: &str) -> Result<Expansion, ExpandError> {
        let re = PLACEHOLDER_RE.as_ref().map_err(|e| ExpandError::Regex(e.to_string()))?;

        let skip = if self.options.skip_code_blocks {
            code_block_ranges(text)
        } else {
            Vec::new()
        };

        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut expanded = 0;
        let mut diagnostics = Vec::new();

        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            if overlaps(&skip, &m.range()) {
                continue;
            }

            let placeholder = m.as_str();
            let line = text[..m.start()].matches('\n').count() + 1;

            let call = match parse_call(&caps[1]) {
                Ok(call) => call,
                Err(e) => {
                    debug!(line, placeholder, "not a macro call: {e}");
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::NotACall,
                        placeholder: placeholder.to_string(),
                        line,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if !self.registry.contains(&call.name) {
                warn!(line, placeholder, "unknown macro '{}'", call.name);
                diagnostics.push(Diagnostic {
                    kind: DiagnosticKind::UnknownMacro,
                    placeholder: placeholder.to_string(),
                    line,
                    message: MacroError::Unknown(call.name.clone()).to_string(),
                });
                continue;
            }

            match self.registry.invoke(&call) {
                Ok(rendered) => {
                    out.push_str(&text[last..m.start()]);
                    out.push_str(&rendered);
                    last = m.end();
                    expanded += 1;
                }
                Err(source) if self.options.strict => {
                    return Err(ExpandError::Macro {
                        placeholder: placeholder.to_string(),
                        line,
                        source,
                    });
                }
                Err(e) => {
                    warn!(line, placeholder, "macro failed: {e}");
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::MacroFailed,
                        placeholder: placeholder.to_string(),
                        line,
                        message: e.to_string(),
                    });
                }
            }
        }
        out.push_str(&text[last..]);

        Ok(Expansion { content: out, expanded, diagnostics })
    }
}

fn shift_error_line(err: ExpandError, offset: usize) -> ExpandError {
    match err {
        ExpandError::Macro { placeholder, line, source } => {
            ExpandError::Macro { placeholder, line: line + offset, source }
        }
        other => other,
    }
}
