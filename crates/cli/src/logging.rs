use docmacro_core::config::loader::ConfigLoader;
use docmacro_core::config::types::LoggingConfig;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Where a command takes its `[logging]` settings from.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// The `[logging]` table of the resolved config file.
    Config { config: Option<&'a Path>, profile: Option<&'a str> },
    /// Built-in defaults: `info` on stderr, no file.
    Defaults,
}

impl Source<'_> {
    /// Resolve the logging settings.
    ///
    /// A config that fails to load yields the defaults here; the command
    /// itself reports the config error.
    pub fn settings(&self) -> LoggingConfig {
        match *self {
            Self::Config { config, profile } => ConfigLoader::load_or_fallback(config, profile)
                .map(|rc| rc.logging)
                .unwrap_or_default(),
            Self::Defaults => LoggingConfig::default(),
        }
    }
}

/// Install the stderr layer and, when configured, a file layer.
///
/// stdout is reserved for command output (and the book JSON in preprocessor
/// mode), so nothing is ever logged there.
pub fn init(cfg: &LoggingConfig) {
    let stderr_level = parse_level(&cfg.level).unwrap_or(LevelFilter::INFO);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .with_filter(env_filter(stderr_level));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(path) = cfg.file.as_deref() else {
        registry.init();
        return;
    };

    let file_level = cfg
        .file_level
        .as_deref()
        .and_then(parse_level)
        .or_else(|| parse_level(&cfg.level))
        .unwrap_or(LevelFilter::DEBUG);

    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // Flushed on drop, so the guard lives until exit
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter(file_level));

    registry.with(file_layer).init();
}

/// `RUST_LOG` wins over the configured level.
fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
