//! Macro expansion over Markdown text.

pub mod code_regions;
pub mod engine;

pub use code_regions::code_block_ranges;
pub use engine::{
    Diagnostic, DiagnosticKind, ExpandError, ExpandOptions, Expander, Expansion,
};
