#![forbid(unsafe_code)]
// Allow these clippy lints for API ergonomics
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::redundant_closure_for_method_calls)]

//! # Poketheme
//!
//! Pokémon type colors and the themes derived from them.
//!
//! - **Type colors**: a fixed table of 18 `#RRGGBB` colors, one per type
//! - **Themes**: primary/secondary colors and a 135° CSS gradient for a
//!   Pokémon's one or two types
//! - **Contrast**: black or white text for any background color
//! - **Palettes**: optional TOML/JSON overrides of the built-in colors
//!
//! Every operation is a pure function over immutable data, so it can be
//! called from any number of threads without coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use poketheme::{contrast_color, lighten_color, resolve_theme, resolve_type_color};
//!
//! let theme = resolve_theme(&["fire"]);
//! assert_eq!(theme.gradient, "linear-gradient(135deg, #F08030 0% , #F08030 100%)");
//!
//! // Unknown types never fail; they fall back to `normal`.
//! assert_eq!(resolve_type_color("???"), resolve_type_color("normal"));
//!
//! assert_eq!(contrast_color("#FFFFFF").unwrap().to_string(), "#000000");
//! assert_eq!(lighten_color("water").to_string(), "#90B8FF");
//! ```
//!
//! ## Custom palettes
//!
//! ```rust
//! use poketheme::{ThemeResolver, TypeColorTable};
//!
//! let table = TypeColorTable::from_toml(r##"fire = "#FF0000""##).unwrap();
//! let resolver = ThemeResolver::new(&table);
//! assert_eq!(resolver.resolve_type_color("fire").to_string(), "#FF0000");
//! ```

pub mod color;
pub mod palette;
pub mod pokemon_type;
pub mod theme;

pub use color::{ColorError, HexColor, LIGHTEN_STEP};
pub use palette::{PaletteLoadError, PaletteSaveError, TypeColorTable};
pub use pokemon_type::{PokemonType, UnknownTypeError};
pub use theme::{
    ThemeResolver, TypeTheme, contrast_color, lighten_color, resolve_theme, resolve_type_color,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::color::{ColorError, HexColor};
    pub use crate::palette::TypeColorTable;
    pub use crate::pokemon_type::PokemonType;
    pub use crate::theme::{
        ThemeResolver, TypeTheme, contrast_color, lighten_color, resolve_theme,
        resolve_type_color,
    };
}
