//! Hex RGB colors and the channel arithmetic behind contrast and lightening.
//!
//! [`HexColor`] is the only color representation in this crate. It always
//! holds three 8-bit channels and always renders as uppercase `#RRGGBB`.
//!
//! # Example
//!
//! ```rust
//! use poketheme::HexColor;
//!
//! let water: HexColor = "#6890f0".parse().unwrap();
//! assert_eq!(water.to_string(), "#6890F0");
//! assert_eq!(water.lighten(40).to_string(), "#90B8FF");
//! assert_eq!(water.contrast(), HexColor::BLACK);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Amount added to every channel by [`crate::lighten_color`].
pub const LIGHTEN_STEP: u8 = 40;

/// Weighted channel sum (in thousandths) above which black text is chosen.
///
/// `0.5 * 255 * 1000`. Comparing integers keeps the `L == 0.5` boundary exact.
const CONTRAST_THRESHOLD: u32 = 127_500;

/// Error produced when a string is not a `#RRGGBB` color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format '{0}': expected #RRGGBB")]
    InvalidColorFormat(String),
}

/// A 24-bit RGB color written as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    /// Pure black, the contrast color for light backgrounds.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);

    /// Pure white, the contrast color for dark backgrounds.
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);

    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (either hex case). Anything else is rejected whole.
    ///
    /// # Errors
    /// Returns [`ColorError::InvalidColorFormat`] if `s` is not exactly a
    /// `#` followed by six hex digits.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidColorFormat(s.to_string());

        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Returns the `(r, g, b)` channels.
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Perceptual luminance in `[0.0, 1.0]` using BT.601 weights.
    ///
    /// `L = (0.299 R + 0.587 G + 0.114 B) / 255`
    #[allow(clippy::suboptimal_flops)]
    pub fn relative_luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }

    /// Best-contrast foreground: black when luminance is strictly above
    /// 0.5, white otherwise.
    pub const fn contrast(self) -> Self {
        if self.weighted_sum() > CONTRAST_THRESHOLD {
            Self::BLACK
        } else {
            Self::WHITE
        }
    }

    /// Adds `amount` to each channel, saturating at 255.
    pub const fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    // 299 R + 587 G + 114 B, i.e. the luminance numerator scaled by 1000.
    const fn weighted_sum(self) -> u32 {
        299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for HexColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(HexColorVisitor)
    }
}

struct HexColorVisitor;

impl<'de> Visitor<'de> for HexColorVisitor {
    type Value = HexColor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a #RRGGBB string or an RGB map")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        HexColor::parse(v).map_err(E::custom)
    }

    fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
        let mut r: Option<u8> = None;
        let mut g: Option<u8> = None;
        let mut b: Option<u8> = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "r" | "red" => r = Some(map.next_value()?),
                "g" | "green" => g = Some(map.next_value()?),
                "b" | "blue" => b = Some(map.next_value()?),
                _ => {
                    let _ = map.next_value::<de::IgnoredAny>()?;
                }
            }
        }

        match (r, g, b) {
            (Some(r), Some(g), Some(b)) => Ok(HexColor::new(r, g, b)),
            _ => Err(de::Error::custom("RGB color requires r, g, b fields")),
        }
    }
}
