//! Logging setup for the application.

use anyhow::Result;
use chrono::Utc;
use log::LevelFilter;
use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

static INIT: OnceCell<()> = OnceCell::new();

/// Initialize the global logger from the logging configuration.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = if config.enabled {
        config.level_filter()?
    } else {
        LevelFilter::Off
    };

    INIT.get_or_try_init(|| {
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Utc::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stderr())
            .apply()
            .map_err(anyhow::Error::from)
    })?;

    Ok(())
}
