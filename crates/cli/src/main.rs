mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "docmacro",
    version,
    about = "Expand documentation macros such as version badges",
    long_about = "Expand documentation macros such as version badges.\n\n\
        Run without a subcommand to act as an mdBook preprocessor."
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// List registered macros
    ListMacros,

    /// Invoke a macro directly and print its output
    Render(RenderArgs),

    /// Expand macros in a single Markdown file
    Expand(ExpandArgs),

    /// Expand every page under docs_dir into output_dir
    Build(BuildArgs),

    /// mdBook probe: exit 0 if the renderer is supported
    Supports(SupportsArgs),

    /// mdBook preprocessor: read [context, book] on stdin, write the book to stdout
    Preprocess,
}

impl Commands {
    /// Whether the command reads the config file at all.
    ///
    /// `render`, `supports` and the mdBook preprocessor run on built-in
    /// defaults (plus `book.toml` for the latter).
    fn reads_config(&self) -> bool {
        matches!(self, Self::Doctor | Self::ListMacros | Self::Expand(_) | Self::Build(_))
    }
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Macro name (e.g. "since")
    pub name: String,

    /// Positional macro arguments
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Markdown file to expand
    pub file: PathBuf,

    /// Write the result here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Leave failing macros in place instead of aborting
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Override the configured docs directory
    #[arg(long)]
    pub docs_dir: Option<PathBuf>,

    /// Override the configured output directory
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Leave failing macros in place instead of aborting
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Debug, Args)]
pub struct SupportsArgs {
    /// Renderer name passed by mdBook
    pub renderer: String,
}

fn main() {
    let cli = Cli::parse();

    let config = cli.config.as_deref();
    let profile = cli.profile.as_deref();

    let source = match &cli.command {
        Some(command) if command.reads_config() => logging::Source::Config { config, profile },
        _ => logging::Source::Defaults,
    };
    logging::init(&source.settings());

    match cli.command {
        Some(Commands::Doctor) => cmd::doctor::run(config, profile),
        Some(Commands::ListMacros) => cmd::list_macros::run(config, profile),
        Some(Commands::Render(args)) => cmd::render::run(&args),
        Some(Commands::Expand(args)) => cmd::expand::run(config, profile, &args),
        Some(Commands::Build(args)) => cmd::build::run(config, profile, &args),
        Some(Commands::Supports(args)) => cmd::preprocess::supports(&args.renderer),
        Some(Commands::Preprocess) | None => cmd::preprocess::run(),
    }
}
