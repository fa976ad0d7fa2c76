use anyhow::Result;
use std::env;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn log_level() -> Level {
    env::var("LOG_LEVEL")
        .map(|level| match level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            _ => Level::INFO,
        })
        .unwrap_or(Level::INFO)
}

fn env_filter(level: Level) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    // Transport internals are noisy at debug level.
    for directive in ["h2=warn", "hyper=warn", "tower=warn", "rmcp::transport=warn"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Logs go to stderr because stdout carries the stdio transport. With `log_dir`
/// set, a daily rolling file is written as well.
pub fn init_logging(log_dir: Option<&Path>) -> Result<()> {
    let level = log_level();

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "macos-use-mcp.log");
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(env_filter(level)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_filter(env_filter(level)),
        )
        .with(file_layer)
        .try_init()?;

    if let Some(dir) = log_dir {
        tracing::info!("Log files will be written to: {}", dir.display());
    }

    Ok(())
}
