//! Command-line interface for `poketheme`.
//!
//! # Examples
//!
//! ```bash
//! # Theme for a dual-type Pokémon
//! poketheme theme water poison
//!
//! # Text color for a background
//! poketheme contrast '#6890F0'
//!
//! # Use a custom palette and print CSS variables
//! poketheme --palette my-colors.toml --format css theme fire
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Resolve Pokémon type colors, gradient themes, and contrast colors.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "poketheme",
    author,
    version,
    about = "Resolve Pokémon type colors, gradient themes, and contrast colors"
)]
pub struct Cli {
    /// Palette file (.toml or .json) overriding the built-in type colors
    #[arg(long, short = 'p', env = "POKETHEME_PALETTE")]
    pub palette: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Enable verbose logging (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Theme for up to two types (extra types are ignored)
    Theme {
        /// Type identifiers, any case; none means `normal`
        types: Vec<String>,
    },

    /// Color of a single type
    Color {
        /// Type identifier, any case
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// Black or white text color for a #RRGGBB background
    Contrast {
        /// Background color, e.g. '#6890F0'
        hex: String,
    },

    /// Lightened color of a single type
    Lighten {
        /// Type identifier, any case
        #[arg(value_name = "TYPE")]
        type_name: String,
    },

    /// List every type with its color
    Types,
}

/// Output formats.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Plain,
    /// Pretty-printed JSON
    Json,
    /// CSS custom properties
    Css,
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Get log level based on verbosity.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        match self.verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Log level for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only show warnings and errors
    #[default]
    Warn,
    /// Show info messages
    Info,
    /// Show debug messages
    Debug,
    /// Show all messages including trace
    Trace,
}

impl LogLevel {
    /// Directive for `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
