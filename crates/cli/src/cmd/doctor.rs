use docmacro_core::config::loader::{ConfigLoader, default_config_path};
use docmacro_core::badge::BadgeRenderer;
use docmacro_core::macros::MacroRegistry;
use std::path::Path;
use tracing::debug;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    debug!("running doctor");
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            let registry = MacroRegistry::with_builtins(&BadgeRenderer::new(&rc.releases_url));
            println!("OK   docmacro doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("project_root: {}", rc.project_root.display());
            println!("docs_dir: {}", rc.docs_dir.display());
            println!("output_dir: {}", rc.output_dir.display());
            println!("releases_url: {}", rc.releases_url);
            println!("expand.skip_code_blocks: {}", rc.expand.skip_code_blocks);
            println!("expand.strict: {}", rc.expand.strict);
            println!("logging.level: {}", rc.logging.level);
            println!("macros: {}", registry.len());
        }
        Err(e) => {
            println!("FAIL docmacro doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
