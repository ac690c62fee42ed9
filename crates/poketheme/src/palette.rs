//! The type → color table and user palette overrides.
//!
//! [`TypeColorTable::standard`] is the built-in table every free function in
//! this crate reads from. It lives in a `static` and is never mutated.
//!
//! A palette file is a flat map of type name to `#RRGGBB`. Types missing from
//! the file keep their standard color:
//!
//! ```toml
//! fire = "#FF4422"
//! water = { r = 51, g = 153, b = 255 }
//! ```
//!
//! Names ignore case, but each type may appear only once.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, info};

use crate::color::HexColor;
use crate::pokemon_type::PokemonType;

/// The process-wide built-in table.
static STANDARD_TABLE: TypeColorTable = TypeColorTable::STANDARD;

/// A complete mapping from every [`PokemonType`] to its color.
///
/// The table always has exactly one entry per type, so lookups by
/// [`PokemonType`] cannot miss.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeColorTable {
    colors: [HexColor; PokemonType::COUNT],
}

impl TypeColorTable {
    /// The standard type colors, in [`PokemonType::ALL`] order.
    pub const STANDARD: Self = Self {
        colors: [
            HexColor::new(0xA8, 0xA8, 0x78), // normal
            HexColor::new(0xF0, 0x80, 0x30), // fire
            HexColor::new(0x68, 0x90, 0xF0), // water
            HexColor::new(0xF8, 0xD0, 0x30), // electric
            HexColor::new(0x78, 0xC8, 0x50), // grass
            HexColor::new(0x98, 0xD8, 0xD8), // ice
            HexColor::new(0xC0, 0x30, 0x28), // fighting
            HexColor::new(0xA0, 0x40, 0xA0), // poison
            HexColor::new(0xE0, 0xC0, 0x68), // ground
            HexColor::new(0xA8, 0x90, 0xF0), // flying
            HexColor::new(0xF8, 0x58, 0x88), // psychic
            HexColor::new(0xA8, 0xB8, 0x20), // bug
            HexColor::new(0xB8, 0xA0, 0x38), // rock
            HexColor::new(0x70, 0x58, 0x98), // ghost
            HexColor::new(0x70, 0x38, 0xF8), // dragon
            HexColor::new(0x70, 0x58, 0x48), // dark
            HexColor::new(0xB8, 0xB8, 0xD0), // steel
            HexColor::new(0xEE, 0x99, 0xAC), // fairy
        ],
    };

    /// Shared reference to the built-in table.
    pub fn standard() -> &'static Self {
        &STANDARD_TABLE
    }

    /// Color for a known type.
    pub const fn get(&self, ty: PokemonType) -> HexColor {
        self.colors[ty.index()]
    }

    /// Color for a type identifier (any case), or `None` if unrecognized.
    pub fn lookup(&self, name: &str) -> Option<HexColor> {
        PokemonType::from_name(name).map(|ty| self.get(ty))
    }

    /// Returns a copy with one type recolored.
    pub fn with_color(mut self, ty: PokemonType, color: HexColor) -> Self {
        self.colors[ty.index()] = color;
        self
    }

    /// Iterates `(type, color)` pairs in [`PokemonType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (PokemonType, HexColor)> + '_ {
        PokemonType::ALL.into_iter().map(|ty| (ty, self.get(ty)))
    }

    /// Number of types that differ from the standard table.
    pub fn override_count(&self) -> usize {
        self.iter()
            .filter(|&(ty, color)| Self::STANDARD.get(ty) != color)
            .count()
    }

    /// Builds a table from `name → color` pairs on top of the standard one.
    ///
    /// # Errors
    /// Returns [`PaletteLoadError::UnknownType`] for a name outside the 18
    /// types, [`PaletteLoadError::DuplicateType`] when two names resolve to
    /// the same type, and [`PaletteLoadError::InvalidColor`] for a value that
    /// is not `#RRGGBB`.
    pub fn from_overrides<I, K, V>(overrides: I) -> Result<Self, PaletteLoadError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Self::from_entries(
            overrides
                .into_iter()
                .map(|(name, value)| (name, PaletteEntry::Hex(value.as_ref().to_string()))),
        )
    }

    fn from_entries<I, K>(entries: I) -> Result<Self, PaletteLoadError>
    where
        I: IntoIterator<Item = (K, PaletteEntry)>,
        K: AsRef<str>,
    {
        let mut table = Self::STANDARD;
        let mut seen = [false; PokemonType::COUNT];
        for (name, entry) in entries {
            let name = name.as_ref();
            let ty = PokemonType::from_name(name)
                .ok_or_else(|| PaletteLoadError::UnknownType(name.to_string()))?;
            if std::mem::replace(&mut seen[ty.index()], true) {
                return Err(PaletteLoadError::DuplicateType(name.to_string()));
            }
            let color = match entry {
                PaletteEntry::Rgb(color) => color,
                PaletteEntry::Hex(value) => {
                    HexColor::parse(&value).map_err(|_| PaletteLoadError::InvalidColor {
                        type_name: ty.name(),
                        value,
                    })?
                }
            };
            debug!(palette.type_name = ty.name(), palette.color = %color, "Palette override");
            table = table.with_color(ty, color);
        }
        Ok(table)
    }

    /// Loads overrides from TOML text.
    ///
    /// # Errors
    /// Returns `PaletteLoadError` if TOML parsing or validation fails.
    pub fn from_toml(toml: &str) -> Result<Self, PaletteLoadError> {
        let raw: BTreeMap<String, PaletteEntry> = toml::from_str(toml)?;
        Self::from_entries(raw)
    }

    /// Loads overrides from JSON text.
    ///
    /// # Errors
    /// Returns `PaletteLoadError` if JSON parsing or validation fails.
    pub fn from_json(json: &str) -> Result<Self, PaletteLoadError> {
        let raw: BTreeMap<String, PaletteEntry> = serde_json::from_str(json)?;
        Self::from_entries(raw)
    }

    /// Loads overrides from a file (format inferred by extension).
    ///
    /// # Errors
    /// Returns `PaletteLoadError` if reading, parsing, or validation fails.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PaletteLoadError> {
        let path = path.as_ref();
        let table = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?),
            Some("json") => Self::from_json(&fs::read_to_string(path)?),
            Some(ext) => Err(PaletteLoadError::UnsupportedFormat(ext.into())),
            None => Err(PaletteLoadError::UnsupportedFormat("unknown".into())),
        }?;
        info!(
            palette.path = %path.display(),
            palette.overrides = table.override_count(),
            "Palette loaded"
        );
        Ok(table)
    }

    /// Serializes all 18 entries to TOML.
    ///
    /// # Errors
    /// Returns `PaletteSaveError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, PaletteSaveError> {
        toml::to_string_pretty(self).map_err(PaletteSaveError::Toml)
    }

    /// Serializes all 18 entries to JSON.
    ///
    /// # Errors
    /// Returns `PaletteSaveError` if serialization fails.
    pub fn to_json(&self) -> Result<String, PaletteSaveError> {
        serde_json::to_string_pretty(self).map_err(PaletteSaveError::Json)
    }
}

impl Default for TypeColorTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Serialize for TypeColorTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PokemonType::COUNT))?;
        for (ty, color) in self.iter() {
            map.serialize_entry(ty.name(), &color)?;
        }
        map.end()
    }
}

/// One value in a palette file: a `#RRGGBB` string or an `{ r, g, b }` map.
///
/// Strings are kept raw so a bad value is reported against its type.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaletteEntry {
    Hex(String),
    Rgb(HexColor),
}

/// Error loading a palette.
#[derive(Error, Debug)]
pub enum PaletteLoadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Unknown type '{0}' in palette")]
    UnknownType(String),
    #[error("Type '{0}' appears more than once in palette")]
    DuplicateType(String),
    #[error("Invalid color value '{value}' for type '{type_name}'")]
    InvalidColor {
        type_name: &'static str,
        value: String,
    },
}

/// Error saving a palette.
#[derive(Error, Debug)]
pub enum PaletteSaveError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}
