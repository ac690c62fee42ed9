#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Poketheme CLI
//!
//! Command-line access to the `poketheme` library: type themes, type
//! colors, contrast colors, and lightened colors, printed as text, JSON, or
//! CSS custom properties.
//!
//! ## Quick start (library)
//!
//! ```rust
//! use poketheme_cli::{Command, Config, run};
//!
//! let output = run(&Config::default(), &Command::Lighten { type_name: "water".into() }).unwrap();
//! assert_eq!(output, "#90B8FF\n");
//! ```

pub mod cli;
pub mod config;

use std::fmt::Write as _;

use poketheme::{
    ColorError, HexColor, PaletteLoadError, PaletteSaveError, ThemeResolver, TypeColorTable,
    TypeTheme, contrast_color,
};
use serde_json::json;
use thiserror::Error;
use tracing::info;

pub use cli::{Cli, Command, LogLevel, OutputFormat};
pub use config::{Config, init_logging};

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to load palette: {0}")]
    Palette(#[from] PaletteLoadError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("failed to encode palette: {0}")]
    PaletteSave(#[from] PaletteSaveError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Run one command and return the text to print.
///
/// The palette is read only by commands that look up type colors, so
/// `contrast` works even when the configured palette is broken.
///
/// # Errors
///
/// Returns an error if the palette cannot be loaded, the contrast input is
/// not `#RRGGBB`, or the output cannot be encoded.
pub fn run(config: &Config, command: &Command) -> Result<String> {
    let format = config.format;

    info!(command = ?command, format = ?format, "Running command");

    match command {
        Command::Theme { types } => {
            let table = config.load_palette()?;
            let theme = ThemeResolver::new(&table).resolve_theme(types.as_slice());
            render_theme(&theme, format)
        }
        Command::Color { type_name } => {
            let table = config.load_palette()?;
            let color = ThemeResolver::new(&table).resolve_type_color(type_name);
            render_color("type", type_name, "type-color", color, format)
        }
        Command::Contrast { hex } => {
            let color = contrast_color(hex)?;
            render_color("background", hex, "contrast-color", color, format)
        }
        Command::Lighten { type_name } => {
            let table = config.load_palette()?;
            let color = ThemeResolver::new(&table).lighten_color(type_name);
            render_color("type", type_name, "lightened-color", color, format)
        }
        Command::Types => render_table(&config.load_palette()?, format),
    }
}

fn render_theme(theme: &TypeTheme, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => format!(
            "primary: {}\nsecondary: {}\ngradient: {}\n",
            theme.primary, theme.secondary, theme.gradient
        ),
        OutputFormat::Json => serde_json::to_string_pretty(theme)? + "\n",
        OutputFormat::Css => theme.to_css_vars(),
    })
}

fn render_color(
    input_key: &str,
    input: &str,
    css_name: &str,
    color: HexColor,
    format: OutputFormat,
) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => format!("{color}\n"),
        OutputFormat::Json => {
            let value = json!({ input_key: input, "color": color });
            serde_json::to_string_pretty(&value)? + "\n"
        }
        OutputFormat::Css => format!("--{css_name}: {color};\n"),
    })
}

fn render_table(table: &TypeColorTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => {
            let mut out = String::new();
            for (ty, color) in table.iter() {
                let _ = writeln!(out, "{:<10}{color}", ty.name());
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(table.to_json()? + "\n"),
        OutputFormat::Css => {
            let mut out = String::new();
            for (ty, color) in table.iter() {
                let _ = writeln!(out, "--type-{ty}: {color};");
            }
            Ok(out)
        }
    }
}
