use docmacro_core::badge::BadgeRenderer;
use docmacro_core::macros::MacroRegistry;
use std::path::Path;
use tabled::{Table, Tabled, settings::Style};

use super::load_config_or_exit;

/// Row for the macro table.
#[derive(Tabled)]
struct MacroRow {
    #[tabled(rename = "Macro")]
    name: String,
    #[tabled(rename = "Usage")]
    usage: String,
    #[tabled(rename = "Description")]
    description: String,
}

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let cfg = load_config_or_exit("list-macros", config, profile);
    let registry = MacroRegistry::with_builtins(&BadgeRenderer::new(&cfg.releases_url));

    let macros = registry.list();
    if macros.is_empty() {
        println!("(no macros registered)");
        return;
    }

    let rows: Vec<MacroRow> = macros
        .into_iter()
        .map(|m| MacroRow {
            usage: format!("{{{{ {}({}) }}}}", m.name, m.signature),
            name: m.name,
            description: m.description,
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
    println!("-- {} macros --", rows.len());
}
