use crate::ExpandArgs;
use docmacro_core::badge::BadgeRenderer;
use docmacro_core::expand::{ExpandOptions, Expander};
use docmacro_core::macros::MacroRegistry;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::load_config_or_exit;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ExpandArgs) {
    let cfg = load_config_or_exit("expand", config, profile);
    let registry = MacroRegistry::with_builtins(&BadgeRenderer::new(&cfg.releases_url));

    let mut options = ExpandOptions::from(&cfg.expand);
    if args.lenient {
        options.strict = false;
    }
    let expander = Expander::new(&registry, options);

    let content = match fs::read_to_string(&args.file) {
        Ok(c) => c,
        Err(e) => {
            println!("FAIL docmacro expand");
            println!("failed to read {}: {e}", args.file.display());
            std::process::exit(1);
        }
    };

    let expansion = match expander.expand_page(&content) {
        Ok(exp) => exp,
        Err(e) => {
            println!("FAIL docmacro expand");
            println!("{}: {e}", args.file.display());
            std::process::exit(1);
        }
    };

    debug!(
        file = %args.file.display(),
        expanded = expansion.expanded,
        left = expansion.diagnostics.len(),
        "expanded file"
    );

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &expansion.content) {
                println!("FAIL docmacro expand");
                println!("failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
            println!("OK   docmacro expand");
            println!("wrote: {} ({} macros expanded)", path.display(), expansion.expanded);
        }
        None => print!("{}", expansion.content),
    }
}
