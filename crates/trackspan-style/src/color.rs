//! Color values for slider painting.
//!
//! The crate carries its own RGBA type, decoupled from any particular GUI
//! toolkit. Fill and outline lookups resolve to [`Rgba`] (or gradients of
//! it), and the painting layer converts to whatever color model it draws
//! with.
//!
//! Accepted string forms:
//!
//! - Hex: `#rgb`, `#rrggbb`, `#aarrggbb` (alpha-leading 8-digit form)
//! - Named colors: the CSS basic names, gray aliases, and `transparent`
//!
//! # Example
//!
//! ```rust
//! use trackspan_style::Rgba;
//!
//! assert_eq!(Rgba::parse("#ff0000").unwrap(), Rgba::rgb(255, 0, 0));
//! assert_eq!(Rgba::parse("#f80").unwrap(), Rgba::rgb(255, 136, 0));
//! assert_eq!(Rgba::parse("transparent").unwrap(), Rgba::TRANSPARENT);
//! assert!(Rgba::parse("not-a-color").is_err());
//! ```

use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Hex string with an unsupported digit count or non-hex characters.
    #[error("invalid hex color: #{0} (must be 3, 6, or 8 digits)")]
    InvalidHex(String),
    /// Name not present in the named-color table.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    /// Fully transparent black, the "draws nothing" color.
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }

    /// Alpha channel as a 0-1 fraction.
    pub fn alpha_f(self) -> f32 {
        self.3 as f32 / 255.0
    }

    /// Returns the color with its alpha channel set from a 0-1 fraction.
    ///
    /// Out-of-range fractions are clamped.
    pub fn with_alpha_f(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba(self.0, self.1, self.2, a)
    }

    /// Parses a color from a string value.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        Self::parse_named(s)
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        if !hex.is_ascii() {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let digit = |range: &str| {
            u8::from_str_radix(range, 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => Ok(Rgba::rgb(
                digit(&hex[0..1])? * 17,
                digit(&hex[1..2])? * 17,
                digit(&hex[2..3])? * 17,
            )),
            // 6-digit hex: #rrggbb
            6 => Ok(Rgba::rgb(
                digit(&hex[0..2])?,
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
            )),
            // 8-digit hex: #aarrggbb, alpha leading
            8 => Ok(Rgba(
                digit(&hex[2..4])?,
                digit(&hex[4..6])?,
                digit(&hex[6..8])?,
                digit(&hex[0..2])?,
            )),
            _ => Err(ColorError::InvalidHex(hex.to_string())),
        }
    }

    /// Parses a named color.
    fn parse_named(name: &str) -> Result<Self, ColorError> {
        let color = match name.to_lowercase().as_str() {
            "transparent" => Rgba::TRANSPARENT,
            "black" => Rgba::rgb(0, 0, 0),
            "white" => Rgba::rgb(255, 255, 255),
            "red" => Rgba::rgb(255, 0, 0),
            "green" => Rgba::rgb(0, 128, 0),
            "lime" => Rgba::rgb(0, 255, 0),
            "blue" => Rgba::rgb(0, 0, 255),
            "yellow" => Rgba::rgb(255, 255, 0),
            "cyan" | "aqua" => Rgba::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Rgba::rgb(255, 0, 255),
            "gray" | "grey" => Rgba::rgb(128, 128, 128),
            "darkgray" | "darkgrey" => Rgba::rgb(169, 169, 169),
            "lightgray" | "lightgrey" => Rgba::rgb(211, 211, 211),
            "silver" => Rgba::rgb(192, 192, 192),
            "orange" => Rgba::rgb(255, 165, 0),
            "purple" => Rgba::rgb(128, 0, 128),
            "navy" => Rgba::rgb(0, 0, 128),
            "teal" => Rgba::rgb(0, 128, 128),
            "maroon" => Rgba::rgb(128, 0, 0),
            "olive" => Rgba::rgb(128, 128, 0),
            _ => return Err(ColorError::UnknownName(name.to_string())),
        };
        Ok(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Hex parsing
    // =========================================================================

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Rgba::parse("#ff6b35").unwrap(), Rgba::rgb(255, 107, 53));
        assert_eq!(Rgba::parse("#000000").unwrap(), Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::parse("#ffffff").unwrap(), Rgba::rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Rgba::parse("#fff").unwrap(), Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::parse("#000").unwrap(), Rgba::rgb(0, 0, 0));
        assert_eq!(Rgba::parse("#f80").unwrap(), Rgba::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_8_digit_alpha_leading() {
        assert_eq!(Rgba::parse("#80ff0000").unwrap(), Rgba(255, 0, 0, 128));
        assert_eq!(Rgba::parse("#00000000").unwrap(), Rgba(0, 0, 0, 0));
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(Rgba::parse("#FF6B35").unwrap(), Rgba::rgb(255, 107, 53));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Rgba::parse("#ff").is_err());
        assert!(Rgba::parse("#ffff").is_err());
        assert!(Rgba::parse("#gggggg").is_err());
        assert!(Rgba::parse("#ff6b355").is_err());
        // non-ASCII must not slice mid-character
        assert!(Rgba::parse("#€€").is_err());
    }

    // =========================================================================
    // Named colors
    // =========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Rgba::parse("red").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::parse("white").unwrap(), Rgba::rgb(255, 255, 255));
        assert_eq!(Rgba::parse("navy").unwrap(), Rgba::rgb(0, 0, 128));
    }

    #[test]
    fn test_parse_named_case_insensitive() {
        assert_eq!(Rgba::parse("RED").unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!(Rgba::parse("Red").unwrap(), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn test_parse_gray_aliases() {
        assert_eq!(Rgba::parse("gray").unwrap(), Rgba::parse("grey").unwrap());
        assert_eq!(
            Rgba::parse("darkgray").unwrap(),
            Rgba::parse("darkgrey").unwrap()
        );
    }

    #[test]
    fn test_parse_transparent() {
        let c = Rgba::parse("transparent").unwrap();
        assert_eq!(c, Rgba::TRANSPARENT);
        assert_eq!(c.3, 0);
    }

    #[test]
    fn test_parse_unknown_name() {
        assert!(matches!(
            Rgba::parse("vermillion"),
            Err(ColorError::UnknownName(_))
        ));
        assert!(Rgba::parse("").is_err());
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Rgba::parse("  #ff0000  ").unwrap(), Rgba::rgb(255, 0, 0));
    }

    // =========================================================================
    // Alpha handling
    // =========================================================================

    #[test]
    fn test_with_alpha_f() {
        let c = Rgba::rgb(10, 20, 30).with_alpha_f(0.5);
        assert_eq!(c, Rgba(10, 20, 30, 128));
    }

    #[test]
    fn test_with_alpha_f_clamps() {
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha_f(2.0).3, 255);
        assert_eq!(Rgba::rgb(1, 2, 3).with_alpha_f(-1.0).3, 0);
    }

    #[test]
    fn test_alpha_f_round_trip() {
        let c = Rgba::rgb(0, 0, 0).with_alpha_f(0.3);
        assert!((c.alpha_f() - 0.3).abs() < 0.01);
    }
}
