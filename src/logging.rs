//! Log output for the game
//!
//! The TUI owns stderr, so logs only go to a file and only when one is asked
//! for. Without a subscriber the `tracing` macros in the engine are no-ops.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "snake_tick=info";

/// Install a global subscriber writing plain-text events to `path`
///
/// `RUST_LOG` overrides the default `snake_tick=info` filter.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_path() {
        let err = init_file_logging(Path::new("/nonexistent/dir/snake.log")).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
