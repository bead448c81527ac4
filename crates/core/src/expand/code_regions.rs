//! Locate code blocks so placeholders inside them are left alone.

use std::ops::Range;

use comrak::nodes::NodeValue;
use comrak::{Arena, Options, parse_document};

/// Byte ranges of fenced and indented code blocks, in document order.
///
/// Ranges cover whole lines, from the opening fence to the end of the
/// closing fence line (or EOF for unterminated fences).
pub fn code_block_ranges(input: &str) -> Vec<Range<usize>> {
    let arena = Arena::new();
    let options = default_options();
    let root = parse_document(&arena, input, &options);

    let mut ranges = Vec::new();
    for node in root.descendants() {
        let data = node.data.borrow();
        if let NodeValue::CodeBlock(_) = data.value {
            let pos = data.sourcepos;
            let start = line_start_offset(input, pos.start.line);
            let end = line_end_offset(input, pos.end.line);
            if start < end {
                ranges.push(start..end);
            }
        }
    }
    ranges
}

/// Whether any byte of `span` lies inside one of `ranges`.
pub fn overlaps(ranges: &[Range<usize>], span: &Range<usize>) -> bool {
    ranges.iter().any(|r| span.start < r.end && r.start < span.end)
}

/// Get the byte offset at the end of a line (after newline if present)
fn line_end_offset(input: &str, line_num: usize) -> usize {
    let mut current_line = 1;
    let mut offset = 0;

    for (i, ch) in input.char_indices() {
        if current_line == line_num && ch == '\n' {
            return i + 1;
        }
        if ch == '\n' {
            current_line += 1;
        }
        offset = i + ch.len_utf8();
    }

    offset
}

/// Get the byte offset at the start of a line
fn line_start_offset(input: &str, line_num: usize) -> usize {
    if line_num <= 1 {
        return 0;
    }

    let mut current_line = 1;

    for (i, ch) in input.char_indices() {
        if ch == '\n' {
            current_line += 1;
            if current_line == line_num {
                return i + 1;
            }
        }
    }

    input.len()
}

fn default_options() -> Options<'static> {
    let mut options = Options::default();
    // Same GFM extensions the documentation site renders with
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    options.parse.smart = false;
    options
}
