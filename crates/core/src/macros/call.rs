//! Parser for macro call expressions.
//!
//! Accepts the expression found between `{{` and `}}`:
//! - `since("1.2.3")`, `since('1.2.3')`, `since(1.2.3)`
//! - `name` (no parentheses, zero arguments)
//! - `name(a, "b c", )` (trailing comma allowed)

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallParseError {
    #[error("empty macro expression")]
    Empty,

    #[error("invalid macro name: {0}")]
    InvalidName(String),

    #[error("unterminated string literal in: {0}")]
    UnterminatedString(String),

    #[error("missing closing parenthesis in: {0}")]
    MissingParen(String),

    #[error("unexpected input after macro call: {0}")]
    TrailingInput(String),

    #[error("expected an argument in: {0}")]
    ExpectedArgument(String),
}

/// A parsed macro invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroCall {
    pub name: String,
    pub args: Vec<String>,
}

impl MacroCall {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self { name: name.into(), args }
    }
}

pub fn parse_call(input: &str) -> Result<MacroCall, CallParseError> {
    let expr = input.trim();
    if expr.is_empty() {
        return Err(CallParseError::Empty);
    }

    let name_end = expr.find(|c: char| c == '(' || c.is_whitespace()).unwrap_or(expr.len());
    let name = &expr[..name_end];
    if !is_valid_name(name) {
        return Err(CallParseError::InvalidName(name.to_string()));
    }

    let rest = expr[name_end..].trim_start();
    if rest.is_empty() {
        return Ok(MacroCall::new(name, Vec::new()));
    }

    let Some(inner) = rest.strip_prefix('(') else {
        return Err(CallParseError::TrailingInput(expr.to_string()));
    };

    let mut chars = inner.chars().peekable();
    let args = parse_args(&mut chars, expr)?;

    let trailing: String = chars.collect();
    if !trailing.trim().is_empty() {
        return Err(CallParseError::TrailingInput(expr.to_string()));
    }

    Ok(MacroCall::new(name, args))
}

fn parse_args(
    chars: &mut Peekable<Chars<'_>>,
    expr: &str,
) -> Result<Vec<String>, CallParseError> {
    let mut args = Vec::new();

    loop {
        skip_whitespace(chars);
        match chars.peek().copied() {
            None => return Err(CallParseError::MissingParen(expr.to_string())),
            Some(')') => {
                chars.next();
                return Ok(args);
            }
            Some(',') => return Err(CallParseError::ExpectedArgument(expr.to_string())),
            Some(quote @ ('"' | '\'')) => {
                chars.next();
                args.push(parse_quoted(chars, quote, expr)?);
            }
            Some(_) => args.push(parse_bare(chars)),
        }

        skip_whitespace(chars);
        match chars.next() {
            Some(',') => {}
            Some(')') => return Ok(args),
            None => return Err(CallParseError::MissingParen(expr.to_string())),
            Some(_) => return Err(CallParseError::TrailingInput(expr.to_string())),
        }
    }
}

fn parse_quoted(
    chars: &mut Peekable<Chars<'_>>,
    quote: char,
    expr: &str,
) -> Result<String, CallParseError> {
    let mut value = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped @ ('\\' | '"' | '\'')) => value.push(escaped),
                Some(other) => {
                    value.push('\\');
                    value.push(other);
                }
                None => break,
            },
            c if c == quote => return Ok(value),
            c => value.push(c),
        }
    }
    Err(CallParseError::UnterminatedString(expr.to_string()))
}

fn parse_bare(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut value = String::new();
    while let Some(&c) = chars.peek() {
        if c == ',' || c == ')' || c.is_whitespace() {
            break;
        }
        value.push(c);
        chars.next();
    }
    value
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

/// Macro names follow identifier rules: `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
