//! Macros shipped with docmacro.

use crate::badge::BadgeRenderer;

use super::registry::{DocMacro, MacroError, MacroRegistry};

/// `{{ since("1.2.3") }}`: the "since version X" badge.
#[derive(Debug, Clone, Default)]
pub struct SinceMacro {
    renderer: BadgeRenderer,
}

impl SinceMacro {
    pub const NAME: &'static str = "since";

    pub fn new(renderer: BadgeRenderer) -> Self {
        Self { renderer }
    }
}

impl DocMacro for SinceMacro {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Badge linking to the release listing: (since <version>)"
    }

    fn signature(&self) -> &str {
        "version"
    }

    fn call(&self, args: &[String]) -> Result<String, MacroError> {
        match args {
            [version] => Ok(self.renderer.render(version)),
            [] => Err(MacroError::invalid_argument(Self::NAME, "missing version")),
            _ => Err(MacroError::invalid_argument(
                Self::NAME,
                format!("expected 1 argument, got {}", args.len()),
            )),
        }
    }
}

impl MacroRegistry {
    /// Registry with every built-in macro registered.
    pub fn with_builtins(renderer: &BadgeRenderer) -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(SinceMacro::new(renderer.clone())));
        reg
    }
}
