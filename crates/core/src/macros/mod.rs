//! Named template macros.
//!
//! A macro is invoked from documentation source as `{{ name(args...) }}` and
//! returns a markup fragment that replaces the placeholder.

pub mod builtin;
pub mod call;
pub mod registry;

pub use builtin::SinceMacro;
pub use call::{CallParseError, MacroCall, parse_call};
pub use registry::{DocMacro, MacroError, MacroInfo, MacroRegistry};
