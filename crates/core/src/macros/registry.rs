//! Named macro registry.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use super::call::MacroCall;

/// Errors a macro can raise when invoked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MacroError {
    #[error("invalid argument to macro '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("unknown macro: {0}")]
    Unknown(String),

    #[error("macro '{name}' failed: {message}")]
    Failed { name: String, message: String },
}

impl MacroError {
    pub fn invalid_argument(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument { name: name.to_string(), message: message.into() }
    }
}

/// A named extension point invoked by `{{ name(args...) }}` placeholders.
///
/// Implementations must be stateless from the caller's perspective: the same
/// arguments always produce the same output.
pub trait DocMacro: Send + Sync {
    fn name(&self) -> &str;

    /// One-line description shown by `list-macros`.
    fn description(&self) -> &str {
        ""
    }

    /// Human-readable argument list, e.g. `version`.
    fn signature(&self) -> &str {
        ""
    }

    fn call(&self, args: &[String]) -> Result<String, MacroError>;
}

/// Summary of a registered macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroInfo {
    pub name: String,
    pub signature: String,
    pub description: String,
}

#[derive(Default)]
pub struct MacroRegistry {
    macros: BTreeMap<String, Box<dyn DocMacro>>,
}

impl std::fmt::Debug for MacroRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacroRegistry")
            .field("macros", &self.macros.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MacroRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a macro, replacing (and returning) any macro with the same name.
    pub fn register(&mut self, m: Box<dyn DocMacro>) -> Option<Box<dyn DocMacro>> {
        let name = m.name().to_string();
        debug!(macro_name = %name, "registering macro");
        self.macros.insert(name, m)
    }

    pub fn get(&self, name: &str) -> Option<&dyn DocMacro> {
        self.macros.get(name).map(|m| &**m)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.macros.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.macros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.macros.is_empty()
    }

    /// Registered macros, sorted by name.
    pub fn list(&self) -> Vec<MacroInfo> {
        self.macros
            .values()
            .map(|m| MacroInfo {
                name: m.name().to_string(),
                signature: m.signature().to_string(),
                description: m.description().to_string(),
            })
            .collect()
    }

    pub fn invoke(&self, call: &MacroCall) -> Result<String, MacroError> {
        let m = self
            .get(&call.name)
            .ok_or_else(|| MacroError::Unknown(call.name.clone()))?;
        m.call(&call.args)
    }
}
