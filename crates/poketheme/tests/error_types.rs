//! Unit tests for poketheme error types.
//!
//! Tests verify:
//! - Display formatting
//! - Error chaining (source)
//! - From implementations

use poketheme::{ColorError, HexColor, PaletteLoadError, PokemonType, UnknownTypeError};
use std::error::Error as StdError;
use std::io;

mod color_error_tests {
    use super::*;

    #[test]
    fn test_display_names_input() {
        let e = ColorError::InvalidColorFormat("#12".into());
        let msg = format!("{}", e);
        assert!(msg.contains("invalid color format"));
        assert!(msg.contains("'#12'"));
    }

    #[test]
    fn test_parse_returns_whole_input() {
        let e = "#12345G".parse::<HexColor>().unwrap_err();
        assert_eq!(e, ColorError::InvalidColorFormat("#12345G".into()));
    }

    #[test]
    fn test_no_source() {
        let e = ColorError::InvalidColorFormat(String::new());
        assert!(e.source().is_none());
    }
}

mod unknown_type_error_tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = "cosmic".parse::<PokemonType>().unwrap_err();
        assert_eq!(e.to_string(), "unknown type 'cosmic'");
    }

    #[test]
    fn test_is_std_error() {
        let e: Box<dyn StdError> = Box::new(UnknownTypeError("x".into()));
        assert!(e.source().is_none());
    }
}

mod palette_load_error_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "palette missing");
        let e: PaletteLoadError = io_err.into();
        assert!(matches!(e, PaletteLoadError::Io(_)));
        assert!(e.to_string().contains("palette missing"));
        assert!(e.source().is_some());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: PaletteLoadError = json_err.into();
        assert!(e.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let e = PaletteLoadError::UnsupportedFormat("yaml".into());
        assert_eq!(e.to_string(), "Unsupported format: yaml");
    }

    #[test]
    fn test_unknown_type_display() {
        let e = PaletteLoadError::UnknownType("shadow".into());
        assert_eq!(e.to_string(), "Unknown type 'shadow' in palette");
    }

    #[test]
    fn test_duplicate_type_display() {
        let e = PaletteLoadError::DuplicateType("Fire".into());
        assert_eq!(e.to_string(), "Type 'Fire' appears more than once in palette");
        assert!(e.source().is_none());
    }

    #[test]
    fn test_invalid_color_display() {
        let e = PaletteLoadError::InvalidColor {
            type_name: "fire",
            value: "red".into(),
        };
        assert_eq!(e.to_string(), "Invalid color value 'red' for type 'fire'");
    }

    #[test]
    fn test_debug_impl() {
        let e = PaletteLoadError::UnknownType("shadow".into());
        let debug = format!("{:?}", e);
        assert!(debug.contains("UnknownType"));
    }
}
