//! Type-keyed themes: primary/secondary colors and a diagonal gradient.
//!
//! The free functions ([`resolve_theme`], [`resolve_type_color`],
//! [`contrast_color`], [`lighten_color`]) read the built-in table. A
//! [`ThemeResolver`] does the same against any [`TypeColorTable`], e.g. one
//! loaded from a palette file.
//!
//! Unknown type identifiers are never an error:
//!
//! - an unknown or missing first type falls back to `normal`;
//! - an unknown second type falls back to the *primary* color, not to
//!   `normal`.
//!
//! # Example
//!
//! ```rust
//! use poketheme::resolve_theme;
//!
//! let theme = resolve_theme(&["water", "poison"]);
//! assert_eq!(theme.primary.to_string(), "#6890F0");
//! assert_eq!(theme.secondary.to_string(), "#A040A0");
//! assert_eq!(
//!     theme.gradient,
//!     "linear-gradient(135deg, #6890F0 0% , #A040A0 100%)"
//! );
//! ```

use serde::Serialize;
use tracing::{debug, trace};

use crate::color::{ColorError, HexColor, LIGHTEN_STEP};
use crate::palette::TypeColorTable;
use crate::pokemon_type::PokemonType;

/// Colors derived from a Pokémon's one or two types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeTheme {
    /// Color of the first type.
    pub primary: HexColor,
    /// Color of the second type, or the primary color.
    pub secondary: HexColor,
    /// CSS `linear-gradient` from primary to secondary at 135°.
    pub gradient: String,
}

impl TypeTheme {
    /// Builds a theme from two colors.
    pub fn new(primary: HexColor, secondary: HexColor) -> Self {
        Self {
            primary,
            secondary,
            gradient: gradient(primary, secondary),
        }
    }

    /// Legible text color on top of the primary color.
    pub const fn foreground(&self) -> HexColor {
        self.primary.contrast()
    }

    /// Renders the theme as CSS custom properties, one per line.
    pub fn to_css_vars(&self) -> String {
        format!(
            "--type-primary: {};\n--type-secondary: {};\n--type-gradient: {};\n--type-foreground: {};\n",
            self.primary,
            self.secondary,
            self.gradient,
            self.foreground()
        )
    }
}

fn gradient(primary: HexColor, secondary: HexColor) -> String {
    format!("linear-gradient(135deg, {primary} 0% , {secondary} 100%)")
}

/// Resolves type identifiers against a color table.
#[derive(Debug, Clone, Copy)]
pub struct ThemeResolver<'a> {
    table: &'a TypeColorTable,
}

impl ThemeResolver<'static> {
    /// Resolver over the built-in table.
    pub fn standard() -> Self {
        Self::new(TypeColorTable::standard())
    }
}

impl Default for ThemeResolver<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> ThemeResolver<'a> {
    /// Resolver over `table`.
    pub const fn new(table: &'a TypeColorTable) -> Self {
        Self { table }
    }

    /// The table this resolver reads.
    pub const fn table(&self) -> &'a TypeColorTable {
        self.table
    }

    /// Theme for a sequence of type identifiers. Only the first two matter.
    pub fn resolve_theme<S: AsRef<str>>(&self, types: &[S]) -> TypeTheme {
        let primary_name = types
            .first()
            .map_or(PokemonType::Normal.name(), |t| t.as_ref());
        let secondary_name = types.get(1).map_or(primary_name, |t| t.as_ref());

        let primary = self.resolve_type_color(primary_name);
        let secondary = self.table.lookup(secondary_name).unwrap_or_else(|| {
            debug!(
                theme.secondary = secondary_name,
                theme.fallback = %primary,
                "Unknown secondary type, using primary color"
            );
            primary
        });

        let theme = TypeTheme::new(primary, secondary);
        trace!(
            theme.primary = %theme.primary,
            theme.secondary = %theme.secondary,
            "Theme resolved"
        );
        theme
    }

    /// Color of one type identifier (any case), or the `normal` color.
    pub fn resolve_type_color(&self, type_name: &str) -> HexColor {
        self.table.lookup(type_name).unwrap_or_else(|| {
            debug!(theme.type_name = type_name, "Unknown type, using normal color");
            self.table.get(PokemonType::Normal)
        })
    }

    /// The type's color with [`LIGHTEN_STEP`] added to each channel.
    pub fn lighten_color(&self, type_name: &str) -> HexColor {
        self.resolve_type_color(type_name).lighten(LIGHTEN_STEP)
    }
}

/// Theme for a sequence of type identifiers using the built-in table.
pub fn resolve_theme<S: AsRef<str>>(types: &[S]) -> TypeTheme {
    ThemeResolver::standard().resolve_theme(types)
}

/// Color of one type identifier using the built-in table.
pub fn resolve_type_color(type_name: &str) -> HexColor {
    ThemeResolver::standard().resolve_type_color(type_name)
}

/// Black or white, whichever reads better on `hex`.
///
/// # Errors
/// Returns [`ColorError::InvalidColorFormat`] if `hex` is not `#RRGGBB`.
pub fn contrast_color(hex: &str) -> Result<HexColor, ColorError> {
    HexColor::parse(hex).map(HexColor::contrast)
}

/// Lightened color of one type identifier using the built-in table.
pub fn lighten_color(type_name: &str) -> HexColor {
    ThemeResolver::standard().lighten_color(type_name)
}
