// Copyright 2025 the Sunburst Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color specification parsing and `rgba(...)` formatting.
//!
//! The ring builder treats color handling as a narrow boundary: parse a
//! palette entry once into an [`Rgb`], then stamp out `rgba(r, g, b, a)`
//! strings at varying opacities. Accepted inputs are `#rgb`/`#rrggbb` hex,
//! `rgb(r, g, b)`, and a small set of CSS color names. Anything else, and
//! any opacity outside `[0, 1]`, is rejected with [`ColorError`].

use alloc::format;
use alloc::string::String;
use core::fmt;

/// A base color. Opacity is applied at formatting time, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Errors from color parsing and formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorError {
    /// The color specification is not valid hex, `rgb(...)`, or a known name.
    InvalidFormat,
    /// Opacity was outside `[0, 1]` (or not finite).
    OpacityOutOfRange,
    /// The color palette handed to the ring builder was empty.
    EmptyPalette,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => {
                write!(f, "invalid color format; use hex, rgb(...), or a named color")
            }
            Self::OpacityOutOfRange => write!(f, "opacity value must be between 0 and 1"),
            Self::EmptyPalette => write!(f, "color palette must not be empty"),
        }
    }
}

impl core::error::Error for ColorError {}

/// CSS basic color keywords, enough for palette input.
const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb { r: 0, g: 0, b: 0 }),
    ("silver", Rgb { r: 192, g: 192, b: 192 }),
    ("gray", Rgb { r: 128, g: 128, b: 128 }),
    ("grey", Rgb { r: 128, g: 128, b: 128 }),
    ("white", Rgb { r: 255, g: 255, b: 255 }),
    ("maroon", Rgb { r: 128, g: 0, b: 0 }),
    ("red", Rgb { r: 255, g: 0, b: 0 }),
    ("purple", Rgb { r: 128, g: 0, b: 128 }),
    ("fuchsia", Rgb { r: 255, g: 0, b: 255 }),
    ("magenta", Rgb { r: 255, g: 0, b: 255 }),
    ("green", Rgb { r: 0, g: 128, b: 0 }),
    ("lime", Rgb { r: 0, g: 255, b: 0 }),
    ("olive", Rgb { r: 128, g: 128, b: 0 }),
    ("yellow", Rgb { r: 255, g: 255, b: 0 }),
    ("navy", Rgb { r: 0, g: 0, b: 128 }),
    ("blue", Rgb { r: 0, g: 0, b: 255 }),
    ("teal", Rgb { r: 0, g: 128, b: 128 }),
    ("aqua", Rgb { r: 0, g: 255, b: 255 }),
    ("cyan", Rgb { r: 0, g: 255, b: 255 }),
    ("orange", Rgb { r: 255, g: 165, b: 0 }),
];

impl Rgb {
    /// Opaque white, used for segment borders.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Parse a color specification.
    pub fn parse(spec: &str) -> Result<Self, ColorError> {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = spec
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_rgb_body(body);
        }
        NAMED
            .iter()
            .find(|(name, _)| spec.eq_ignore_ascii_case(name))
            .map(|&(_, color)| color)
            .ok_or(ColorError::InvalidFormat)
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        // Byte indexing below; non-ASCII input is never valid hex anyway.
        if !hex.is_ascii() {
            return Err(ColorError::InvalidFormat);
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidFormat);
        match hex.len() {
            // #rgb: each digit doubled.
            3 => {
                let nibble = |s: &str| channel(s).map(|v| v * 16 + v);
                Ok(Self {
                    r: nibble(&hex[0..1])?,
                    g: nibble(&hex[1..2])?,
                    b: nibble(&hex[2..3])?,
                })
            }
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => Err(ColorError::InvalidFormat),
        }
    }

    fn parse_rgb_body(body: &str) -> Result<Self, ColorError> {
        let mut parts = body.split(',');
        let mut channel = || {
            parts
                .next()
                .map(str::trim)
                .and_then(|p| p.parse::<u8>().ok())
                .ok_or(ColorError::InvalidFormat)
        };
        let (r, g, b) = (channel()?, channel()?, channel()?);
        if parts.next().is_some() {
            return Err(ColorError::InvalidFormat);
        }
        Ok(Self { r, g, b })
    }

    /// Format as `rgba(r, g, b, a)`.
    ///
    /// `opacity` must be in `[0, 1]`; out-of-range or non-finite values are
    /// rejected rather than clamped.
    pub fn with_opacity(self, opacity: f64) -> Result<String, ColorError> {
        if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
            return Err(ColorError::OpacityOutOfRange);
        }
        Ok(format!(
            "rgba({}, {}, {}, {})",
            self.r, self.g, self.b, opacity
        ))
    }
}

/// Parse `spec` and format it at `opacity` in one step.
pub fn with_opacity(spec: &str, opacity: f64) -> Result<String, ColorError> {
    Rgb::parse(spec)?.with_opacity(opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_hex() {
        assert_eq!(Rgb::parse("#ff8000"), Ok(Rgb { r: 255, g: 128, b: 0 }));
        assert_eq!(Rgb::parse("#FF8000"), Ok(Rgb { r: 255, g: 128, b: 0 }));
    }

    #[test]
    fn parses_short_hex() {
        assert_eq!(Rgb::parse("#f00"), Ok(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(Rgb::parse("#abc"), Ok(Rgb { r: 170, g: 187, b: 204 }));
    }

    #[test]
    fn parses_rgb_functional() {
        assert_eq!(
            Rgb::parse("rgb(12, 34, 56)"),
            Ok(Rgb { r: 12, g: 34, b: 56 })
        );
        assert_eq!(Rgb::parse("rgb(0,0,0)"), Ok(Rgb { r: 0, g: 0, b: 0 }));
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(Rgb::parse("red"), Ok(Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(Rgb::parse("Teal"), Ok(Rgb { r: 0, g: 128, b: 128 }));
    }

    #[test]
    fn rejects_malformed_specs() {
        for bad in [
            "", "#ff", "#ggg", "#12345", "#éé", "rgb(1,2)", "rgb(1,2,3,4)", "rgb(300,0,0)", "nope",
        ] {
            assert_eq!(Rgb::parse(bad), Err(ColorError::InvalidFormat), "{bad}");
        }
    }

    #[test]
    fn formats_rgba() {
        let c = Rgb { r: 255, g: 0, b: 0 };
        assert_eq!(c.with_opacity(0.9).unwrap(), "rgba(255, 0, 0, 0.9)");
        assert_eq!(c.with_opacity(0.0).unwrap(), "rgba(255, 0, 0, 0)");
        assert_eq!(c.with_opacity(1.0).unwrap(), "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn rejects_out_of_range_opacity() {
        let c = Rgb::WHITE;
        assert_eq!(c.with_opacity(-0.1), Err(ColorError::OpacityOutOfRange));
        assert_eq!(c.with_opacity(1.1), Err(ColorError::OpacityOutOfRange));
        assert_eq!(c.with_opacity(f64::NAN), Err(ColorError::OpacityOutOfRange));
    }

    #[test]
    fn one_step_helper() {
        assert_eq!(
            with_opacity("#00ff00", 0.5).unwrap(),
            "rgba(0, 255, 0, 0.5)"
        );
        assert_eq!(with_opacity("bogus", 0.5), Err(ColorError::InvalidFormat));
    }
}
