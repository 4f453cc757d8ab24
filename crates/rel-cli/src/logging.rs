//! Log backend for the CLI.
//!
//! Libraries log through the `log` facade; this installs the stderr writer.
//! `RUST_LOG` takes precedence over `--verbose`.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Start logging to stderr. Keep the returned handle alive for the whole run.
pub(crate) fn init(verbose: bool) -> Result<LoggerHandle> {
    let level = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    Logger::try_with_env_or_str(level)
        .context("Invalid log specification")?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")
}
