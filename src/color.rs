use std::str::FromStr;

use palette::rgb::FromHexError;
use palette::Srgb;
use plotters::style::RGBColor;
use thiserror::Error;

/// matplotlib's first cycle colour ("tab:blue"), used for the ψ curve.
pub const LINE_HEX: &str = "#1f77b4";

#[derive(Debug, Error)]
#[error("invalid colour '{hex}': {source}")]
pub struct ColorError {
    pub hex: String,
    #[source]
    pub source: FromHexError,
}

/// Parse `#rrggbb` / `rrggbb` (or the short `#rgb`) into a plotters colour.
pub fn parse_hex(hex: &str) -> Result<RGBColor, ColorError> {
    let rgb = Srgb::<u8>::from_str(hex).map_err(|source| ColorError {
        hex: hex.to_string(),
        source,
    })?;
    Ok(RGBColor(rgb.red, rgb.green, rgb.blue))
}

/// Colour of the plotted wavefunction.
pub fn line_color() -> Result<RGBColor, ColorError> {
    parse_hex(LINE_HEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_line_colour() {
        let c = line_color().unwrap();
        assert_eq!((c.0, c.1, c.2), (0x1f, 0x77, 0xb4));
    }

    #[test]
    fn accepts_short_and_bare_forms() {
        let c = parse_hex("fff").unwrap();
        assert_eq!((c.0, c.1, c.2), (255, 255, 255));
        let c = parse_hex("000000").unwrap();
        assert_eq!((c.0, c.1, c.2), (0, 0, 0));
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_hex("#12345g").unwrap_err();
        assert_eq!(err.hex, "#12345g");
        assert!(err.to_string().starts_with("invalid colour '#12345g'"));
    }
}
