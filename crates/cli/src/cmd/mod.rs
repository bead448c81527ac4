pub mod build;
pub mod doctor;
pub mod expand;
pub mod list_macros;
pub mod preprocess;
pub mod render;

use docmacro_core::config::loader::{ConfigLoader, default_config_path};
use docmacro_core::config::types::ResolvedConfig;
use std::path::Path;

/// Load config for `command`, or print the failure and exit with status 1.
///
/// A missing default config file is not an error: built-in defaults apply.
pub fn load_config_or_exit(
    command: &str,
    config: Option<&Path>,
    profile: Option<&str>,
) -> ResolvedConfig {
    match ConfigLoader::load_or_fallback(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL docmacro {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
