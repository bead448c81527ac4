//! Frontmatter splitting for documentation pages.

use super::types::{PageDocument, PageFrontmatter};
use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

/// Split a page into frontmatter and body.
///
/// Frontmatter must start on the first line:
/// ```markdown
/// ---
/// render_macros: false
/// ---
/// # Page content
/// ```
/// A document without a closing `---` is treated as having no frontmatter,
/// and so is one whose leading block is valid YAML but not a mapping (a
/// thematic break followed by a setext heading, for instance).
pub fn split(content: &str) -> Result<PageDocument, FrontmatterParseError> {
    let no_frontmatter =
        || PageDocument { raw_frontmatter: None, frontmatter: None, body: content.to_string() };

    let Some(first_line_len) = delimiter_line_len(content) else {
        return Ok(no_frontmatter());
    };

    let mut offset = first_line_len;
    let yaml_start = offset;
    while offset < content.len() {
        let rest = &content[offset..];
        if let Some(len) = delimiter_line_len(rest) {
            let yaml = &content[yaml_start..offset];
            let end = offset + len;

            let value = if yaml.trim().is_empty() {
                Value::Null
            } else {
                serde_yaml::from_str::<Value>(yaml)?
            };
            let frontmatter: PageFrontmatter = match value {
                Value::Null => PageFrontmatter::default(),
                value @ Value::Mapping(_) => serde_yaml::from_value(value)?,
                _ => return Ok(no_frontmatter()),
            };

            return Ok(PageDocument {
                raw_frontmatter: Some(content[..end].to_string()),
                frontmatter: Some(frontmatter),
                body: content[end..].to_string(),
            });
        }
        offset += rest.find('\n').map_or(rest.len(), |i| i + 1);
    }

    Ok(no_frontmatter())
}

/// Length of the leading line (including its line break) if it is exactly `---`.
fn delimiter_line_len(s: &str) -> Option<usize> {
    let line_end = s.find('\n').map_or(s.len(), |i| i + 1);
    let line = s[..line_end].trim_end_matches(['\n', '\r']);
    (line == "---").then_some(line_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_frontmatter() {
        let doc = split("# Title\n\nBody").unwrap();
        assert!(doc.raw_frontmatter.is_none());
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, "# Title\n\nBody");
        assert!(doc.renders_macros());
    }

    #[test]
    fn test_frontmatter_roundtrips_verbatim() {
        let input = "---\ntitle: Auth\nrender_macros: true\n---\n# Auth\n";
        let doc = split(input).unwrap();
        assert_eq!(
            doc.raw_frontmatter.as_deref(),
            Some("---\ntitle: Auth\nrender_macros: true\n---\n")
        );
        assert_eq!(doc.body, "# Auth\n");
        assert!(doc.renders_macros());
        assert!(doc.frontmatter.unwrap().extra.contains_key("title"));
    }

    #[test]
    fn test_render_macros_false() {
        let doc = split("---\nrender_macros: false\n---\nbody").unwrap();
        assert!(!doc.renders_macros());
    }

    #[test]
    fn test_crlf_and_empty_frontmatter() {
        let doc = split("---\r\n---\r\nbody").unwrap();
        assert_eq!(doc.raw_frontmatter.as_deref(), Some("---\r\n---\r\n"));
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let input = "---\ntitle: x\nno closing";
        let doc = split(input).unwrap();
        assert!(doc.raw_frontmatter.is_none());
        assert_eq!(doc.body, input);
    }

    #[test]
    fn test_thematic_break_later_is_not_frontmatter() {
        let input = "Intro\n---\nMore";
        let doc = split(input).unwrap();
        assert!(doc.frontmatter.is_none());
    }

    #[test]
    fn test_scalar_block_is_body() {
        let input = "---\nIntro paragraph\n---\n{{ since('1.0') }}\n";
        let doc = split(input).unwrap();
        assert!(doc.raw_frontmatter.is_none());
        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.body, input);
        assert!(doc.renders_macros());
    }

    #[test]
    fn test_sequence_block_is_body() {
        let doc = split("---\n- one\n- two\n---\nbody").unwrap();
        assert!(doc.frontmatter.is_none());
    }

    #[test]
    fn test_comment_only_frontmatter() {
        let doc = split("---\n# nothing yet\n---\nbody").unwrap();
        assert_eq!(doc.raw_frontmatter.as_deref(), Some("---\n# nothing yet\n---\n"));
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = split("---\ntitle: [unclosed\n---\nbody").unwrap_err();
        assert!(err.to_string().starts_with("invalid YAML frontmatter"));
    }
}
