//! The closed set of 18 elemental types.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Error returned when a name is not one of the 18 types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type '{0}'")]
pub struct UnknownTypeError(pub String);

/// A Pokémon elemental type.
///
/// Names are lowercase on output and matched case-insensitively on input,
/// serde included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Number of types.
    pub const COUNT: usize = 18;

    /// Every type, in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Electric,
        Self::Grass,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// The lowercase identifier, e.g. `"fire"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Electric => "electric",
            Self::Grass => "grass",
            Self::Ice => "ice",
            Self::Fighting => "fighting",
            Self::Poison => "poison",
            Self::Ground => "ground",
            Self::Flying => "flying",
            Self::Psychic => "psychic",
            Self::Bug => "bug",
            Self::Rock => "rock",
            Self::Ghost => "ghost",
            Self::Dragon => "dragon",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Position of this type in [`PokemonType::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a type by identifier, ignoring case.
    ///
    /// Non-ASCII input is folded with Unicode lowercasing, so `"DAR\u{212A}"`
    /// (Kelvin sign) names [`PokemonType::Dark`].
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_ascii() {
            return Self::ALL
                .into_iter()
                .find(|ty| ty.name().eq_ignore_ascii_case(name));
        }
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|ty| ty.name() == lower)
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PokemonType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownTypeError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for PokemonType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PokemonTypeVisitor)
    }
}

struct PokemonTypeVisitor;

impl Visitor<'_> for PokemonTypeVisitor {
    type Value = PokemonType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a type name such as \"fire\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_names_are_lowercase_and_unique() {
        let mut names: Vec<&str> = PokemonType::ALL.iter().map(|t| t.name()).collect();
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_lowercase())));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PokemonType::COUNT);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, ty) in PokemonType::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
        }
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(PokemonType::from_name("fire"), Some(PokemonType::Fire));
        assert_eq!(PokemonType::from_name("FIRE"), Some(PokemonType::Fire));
        assert_eq!(PokemonType::from_name("PsYcHiC"), Some(PokemonType::Psychic));
        assert_eq!(PokemonType::from_name("shadow"), None);
        assert_eq!(PokemonType::from_name(""), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "unknown-type".parse::<PokemonType>().unwrap_err();
        assert_eq!(err, UnknownTypeError("unknown-type".into()));
        assert_eq!(err.to_string(), "unknown type 'unknown-type'");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PokemonType::Electric).unwrap();
        assert_eq!(json, "\"electric\"");
        let back: PokemonType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PokemonType::Electric);
    }

    #[test]
    fn test_serde_ignores_case() {
        let ty: PokemonType = serde_json::from_str("\"FIRE\"").unwrap();
        assert_eq!(ty, PokemonType::Fire);
        let ty: PokemonType = serde_json::from_str("\"Dragon\"").unwrap();
        assert_eq!(ty, PokemonType::Dragon);

        let err = serde_json::from_str::<PokemonType>("\"shadow\"").unwrap_err();
        assert!(err.to_string().contains("unknown type 'shadow'"));
        assert!(serde_json::from_str::<PokemonType>("3").is_err());
    }

    #[test]
    fn test_from_name_folds_unicode_case() {
        assert_eq!(PokemonType::from_name("DAR\u{212A}"), Some(PokemonType::Dark));
        assert_eq!(PokemonType::from_name("dar\u{212A}"), Some(PokemonType::Dark));
        assert_eq!(PokemonType::from_name("f\u{131}re"), None);
        assert_eq!(PokemonType::from_name("\u{1F525}"), None);
    }
}
