//! mdBook integration.
//!
//! In `book.toml`:
//! ```toml
//! [preprocessor.docmacro]
//! releases-url = "https://github.com/janoszen/containerssh/releases"
//! ```

use docmacro_core::badge::RELEASES_URL;
use docmacro_core::expand::ExpandOptions;
use docmacro_core::preprocessor::{run_preprocessor, supports_renderer};
use std::io;
use tracing::debug;

pub fn supports(renderer: &str) {
    let supported = supports_renderer(renderer);
    debug!(renderer, supported, "mdbook supports probe");
    if !supported {
        std::process::exit(1);
    }
}

/// Settings come from built-in defaults, overridden only by the book's
/// `[preprocessor.docmacro]` table; the docmacro config file is not read.
pub fn run() {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    if let Err(e) = run_preprocessor(stdin, stdout, RELEASES_URL, ExpandOptions::default()) {
        eprintln!("FAIL docmacro preprocess");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
