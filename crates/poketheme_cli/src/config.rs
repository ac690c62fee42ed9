//! Runtime configuration for `poketheme`.
//!
//! [`Config`] is the resolved form of every runtime option, independent of
//! whether it came from a flag or the environment. Tests construct it
//! directly without going through clap.

use std::path::PathBuf;

use poketheme::{PaletteLoadError, TypeColorTable};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, LogLevel, OutputFormat};

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Optional palette file overriding the built-in colors.
    pub palette_file: Option<PathBuf>,

    /// How results are printed.
    pub format: OutputFormat,

    /// Log verbosity, used when `RUST_LOG` is unset.
    pub log_level: LogLevel,
}

impl Config {
    /// Resolve configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            palette_file: cli.palette.clone(),
            format: cli.format,
            log_level: cli.log_level(),
        }
    }

    /// Load the palette file, or the built-in table if none is configured.
    ///
    /// # Errors
    /// Returns `PaletteLoadError` if the file cannot be read or validated.
    pub fn load_palette(&self) -> Result<TypeColorTable, PaletteLoadError> {
        match &self.palette_file {
            Some(path) => TypeColorTable::from_file(path),
            None => {
                debug!("No palette file configured, using built-in colors");
                Ok(TypeColorTable::standard().clone())
            }
        }
    }

    /// Log filter: `RUST_LOG` if set, otherwise the configured level.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.as_directive()))
    }
}

/// Install the stderr log subscriber. Later calls are no-ops.
pub fn init_logging(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
