//! Page frontmatter handling.
//!
//! Documentation pages may start with a YAML block delimited by `---`. The
//! block is carried through expansion verbatim; only `render_macros` is
//! interpreted.

pub mod parser;
pub mod types;

pub use parser::{FrontmatterParseError, split};
pub use types::{PageDocument, PageFrontmatter};
