//! mdBook preprocessor protocol.
//!
//! mdBook invokes a preprocessor with `supports <renderer>` first, then pipes
//! a JSON array `[context, book]` to its stdin and expects the (modified)
//! book back on stdout. Only chapter `content` is touched; every other field
//! round-trips untouched.

use std::io::{Read, Write};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::badge::BadgeRenderer;
use crate::expand::{ExpandError, ExpandOptions, Expander};
use crate::macros::MacroRegistry;

/// Key under `[preprocessor]` in `book.toml`.
pub const PREPROCESSOR_NAME: &str = "docmacro";

const SUPPORTED_RENDERERS: &[&str] = &["html", "markdown", "linkcheck"];

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("invalid preprocessor JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed preprocessor input: {0}")]
    Malformed(String),

    #[error("chapter '{chapter}': {source}")]
    Expand {
        chapter: String,
        #[source]
        source: ExpandError,
    },

    #[error("failed to write book: {0}")]
    Io(#[from] std::io::Error),
}

/// Settings read from `[preprocessor.docmacro]` in `book.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSettings {
    pub releases_url: Option<String>,
    pub strict: Option<bool>,
    pub skip_code_blocks: Option<bool>,
}

impl BookSettings {
    pub fn from_context(ctx: &Value) -> Self {
        let table = ctx
            .pointer(&format!("/config/preprocessor/{PREPROCESSOR_NAME}"))
            .and_then(Value::as_object);
        let Some(table) = table else {
            return Self::default();
        };

        Self {
            releases_url: table
                .get("releases-url")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned),
            strict: table.get("strict").and_then(Value::as_bool),
            skip_code_blocks: table.get("skip-code-blocks").and_then(Value::as_bool),
        }
    }

    pub fn apply(&self, mut options: ExpandOptions) -> ExpandOptions {
        if let Some(strict) = self.strict {
            options.strict = strict;
        }
        if let Some(skip) = self.skip_code_blocks {
            options.skip_code_blocks = skip;
        }
        options
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookReport {
    pub chapters: usize,
    pub expanded: usize,
}

pub fn supports_renderer(renderer: &str) -> bool {
    SUPPORTED_RENDERERS.contains(&renderer)
}

/// Split the `[context, book]` input array.
pub fn parse_input(input: impl Read) -> Result<(Value, Value), PreprocessError> {
    let value: Value = serde_json::from_reader(input)?;
    match value {
        Value::Array(mut items) if items.len() == 2 => {
            let book = items.pop().unwrap_or(Value::Null);
            let ctx = items.pop().unwrap_or(Value::Null);
            if !ctx.is_object() || !book.is_object() {
                return Err(PreprocessError::Malformed(
                    "expected [context, book] objects".into(),
                ));
            }
            Ok((ctx, book))
        }
        _ => Err(PreprocessError::Malformed("expected a two-element array".into())),
    }
}

/// Expand macros in every chapter of `book`, recursing into sub-chapters.
pub fn expand_book(
    book: &mut Value,
    expander: &Expander<'_>,
) -> Result<BookReport, PreprocessError> {
    let mut report = BookReport::default();
    let mut found = false;
    // `sections` on current mdBook, `items` on older releases
    for key in ["sections", "items"] {
        if let Some(items) = book.get_mut(key).and_then(Value::as_array_mut) {
            found = true;
            expand_items(items, expander, &mut report)?;
        }
    }
    if !found {
        return Err(PreprocessError::Malformed("book has no sections".into()));
    }
    Ok(report)
}

fn expand_items(
    items: &mut [Value],
    expander: &Expander<'_>,
    report: &mut BookReport,
) -> Result<(), PreprocessError> {
    for item in items {
        let Some(chapter) = item.get_mut("Chapter").and_then(Value::as_object_mut) else {
            continue;
        };

        let name = chapter.get("name").and_then(Value::as_str).unwrap_or("").to_string();
        if let Some(Value::String(content)) = chapter.get_mut("content") {
            let expansion = expander
                .expand_page(content)
                .map_err(|e| PreprocessError::Expand { chapter: name.clone(), source: e })?;
            debug!(chapter = %name, expanded = expansion.expanded, "expanded chapter");
            *content = expansion.content;
            report.chapters += 1;
            report.expanded += expansion.expanded;
        }

        if let Some(subs) = chapter.get_mut("sub_items").and_then(Value::as_array_mut) {
            expand_items(subs, expander, report)?;
        }
    }
    Ok(())
}

/// Run one preprocessor pass: read `[context, book]`, write the book.
///
/// `releases_url` and `options` are the defaults; `[preprocessor.docmacro]`
/// in the book config overrides them.
pub fn run_preprocessor(
    input: impl Read,
    mut output: impl Write,
    releases_url: &str,
    options: ExpandOptions,
) -> Result<BookReport, PreprocessError> {
    let (ctx, mut book) = parse_input(input)?;
    let settings = BookSettings::from_context(&ctx);

    let renderer =
        BadgeRenderer::new(settings.releases_url.as_deref().unwrap_or(releases_url));
    let registry = MacroRegistry::with_builtins(&renderer);
    let expander = Expander::new(&registry, settings.apply(options));

    let report = expand_book(&mut book, &expander)?;
    serde_json::to_writer(&mut output, &book)?;
    output.flush()?;

    info!(chapters = report.chapters, expanded = report.expanded, "preprocessed book");
    Ok(report)
}
