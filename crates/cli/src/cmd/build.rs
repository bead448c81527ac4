use crate::BuildArgs;
use docmacro_core::badge::BadgeRenderer;
use docmacro_core::expand::{ExpandOptions, Expander};
use docmacro_core::macros::MacroRegistry;
use docmacro_core::pages::build_site;
use std::path::Path;

use super::load_config_or_exit;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &BuildArgs) {
    let cfg = load_config_or_exit("build", config, profile);
    let registry = MacroRegistry::with_builtins(&BadgeRenderer::new(&cfg.releases_url));

    let mut options = ExpandOptions::from(&cfg.expand);
    if args.lenient {
        options.strict = false;
    }
    let expander = Expander::new(&registry, options);

    let docs_dir = args.docs_dir.as_deref().unwrap_or(&cfg.docs_dir);
    let output_dir = args.output_dir.as_deref().unwrap_or(&cfg.output_dir);

    match build_site(docs_dir, output_dir, &expander) {
        Ok(report) => {
            println!("OK   docmacro build");
            println!("docs_dir: {}", docs_dir.display());
            println!("output_dir: {}", output_dir.display());
            println!("pages: {}", report.pages);
            println!("assets: {}", report.assets);
            println!("macros expanded: {}", report.expanded);
            println!("placeholders left: {}", report.diagnostics.len());
        }
        Err(e) => {
            println!("FAIL docmacro build");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
