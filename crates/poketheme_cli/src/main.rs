#![forbid(unsafe_code)]

//! # Poketheme CLI
//!
//! Resolve Pokémon type themes and colors.
//!
//! ## Usage
//!
//! ```bash
//! poketheme theme water poison    # Primary/secondary colors and gradient
//! poketheme color fire            # One type's color
//! poketheme contrast '#6890F0'    # Black or white text color
//! poketheme lighten water         # Lightened type color
//! poketheme types                 # Every type and its color
//! ```

use poketheme_cli::{Cli, Config, init_logging, run};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli);
    init_logging(&config);

    let output = run(&config, &cli.command)?;
    print!("{output}");

    Ok(())
}
