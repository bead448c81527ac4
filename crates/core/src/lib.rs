#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod badge;
pub mod config;
pub mod expand;
pub mod frontmatter;
pub mod macros;
pub mod pages;
pub mod preprocessor;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
