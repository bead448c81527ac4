use crate::RenderArgs;
use docmacro_core::badge::BadgeRenderer;
use docmacro_core::macros::{MacroCall, MacroRegistry};

/// Invoke a builtin macro with the default releases URL. No config is read.
pub fn run(args: &RenderArgs) {
    let registry = MacroRegistry::with_builtins(&BadgeRenderer::default());

    let call = MacroCall::new(args.name.clone(), args.args.clone());
    match registry.invoke(&call) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            println!("FAIL docmacro render");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
