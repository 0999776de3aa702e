//! OKLCH color values
//!
//! Theme primaries are authored as CSS `oklch(L C H)` literals. They are kept
//! in that space for output and converted to sRGB only for swatch previews.

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A color in the OKLCH perceptual space.
///
/// - `l`: lightness, 0.0 - 1.0
/// - `c`: chroma, 0.0 - ~0.4
/// - `h`: hue in degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OklchColor {
    pub l: f32,
    pub c: f32,
    pub h: f32,
    pub alpha: f32,
}

impl OklchColor {
    pub const BLACK: OklchColor = OklchColor::new(0.0, 0.0, 0.0);
    pub const WHITE: OklchColor = OklchColor::new(1.0, 0.0, 0.0);

    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Parse a CSS `oklch()` literal.
    ///
    /// Accepts a percentage lightness (`62%`), a `deg` hue unit and an
    /// optional `/ alpha` component.
    pub fn parse(src: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColor(src.to_string());

        let body = src
            .trim()
            .strip_prefix("oklch(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let (channels, alpha) = match body.split_once('/') {
            Some((channels, alpha)) => (channels, Some(alpha.trim())),
            None => (body, None),
        };

        let parts: Vec<&str> = channels.split_whitespace().collect();
        let [l, c, h] = parts[..] else {
            return Err(invalid());
        };

        let l = match l.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().map_err(|_| invalid())? / 100.0,
            None => l.parse::<f32>().map_err(|_| invalid())?,
        };
        let c = c.parse::<f32>().map_err(|_| invalid())?;
        let h = h
            .strip_suffix("deg")
            .unwrap_or(h)
            .parse::<f32>()
            .map_err(|_| invalid())?;
        let alpha = match alpha {
            Some(a) => match a.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().map_err(|_| invalid())? / 100.0,
                None => a.parse::<f32>().map_err(|_| invalid())?,
            },
            None => 1.0,
        };

        if !(l.is_finite() && c.is_finite() && h.is_finite() && alpha.is_finite()) {
            return Err(invalid());
        }

        Ok(Self { l, c, h, alpha })
    }

    /// CSS literal form, e.g. `oklch(0.62 0.14 39.04)`.
    pub fn to_css(&self) -> String {
        if self.alpha < 1.0 {
            format!("oklch({} {} {} / {})", self.l, self.c, self.h, self.alpha)
        } else {
            format!("oklch({} {} {})", self.l, self.c, self.h)
        }
    }

    /// Convert to gamma-encoded sRGB, each channel clipped to 0.0 - 1.0.
    pub fn to_srgb(&self) -> [f32; 3] {
        let hue = self.h.to_radians();
        let a = self.c * hue.cos();
        let b = self.c * hue.sin();

        // OKLab -> LMS (cube roots)
        let l_ = self.l + 0.396_337_78 * a + 0.215_803_76 * b;
        let m_ = self.l - 0.105_561_346 * a - 0.063_854_17 * b;
        let s_ = self.l - 0.089_484_18 * a - 1.291_485_5 * b;

        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // LMS -> linear sRGB
        let r = 4.076_741_7 * l - 3.307_711_6 * m + 0.230_969_94 * s;
        let g = -1.268_438 * l + 2.609_757_4 * m - 0.341_319_38 * s;
        let b = -0.004_196_086_3 * l - 0.703_418_6 * m + 1.707_614_7 * s;

        [gamma_encode(r), gamma_encode(g), gamma_encode(b)]
    }

    /// `#rrggbb` for swatch previews. Alpha is dropped.
    pub fn to_srgb_hex(&self) -> String {
        let [r, g, b] = self.to_srgb();
        format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
    }
}

fn gamma_encode(linear: f32) -> f32 {
    let v = if linear <= 0.003_130_8 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    v.clamp(0.0, 1.0)
}

fn to_byte(v: f32) -> u8 {
    (v * 255.0).round() as u8
}

impl Display for OklchColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for OklchColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OklchColor {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OklchColor> for String {
    fn from(color: OklchColor) -> Self {
        color.to_css()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_literal() {
        let c = OklchColor::parse("oklch(0.62 0.14 39.04)").unwrap();
        assert_eq!(c, OklchColor::new(0.62, 0.14, 39.04));
        assert_eq!(c.to_css(), "oklch(0.62 0.14 39.04)");
    }

    #[test]
    fn parses_units_and_alpha() {
        let c = OklchColor::parse("oklch(62% 0.14 39deg / 0.5)").unwrap();
        assert_eq!(c.l, 0.62);
        assert_eq!(c.h, 39.0);
        assert_eq!(c.alpha, 0.5);
        assert_eq!(c.to_css(), "oklch(0.62 0.14 39 / 0.5)");
    }

    #[test]
    fn rejects_malformed_literals() {
        for src in ["", "rgb(1 2 3)", "oklch(0.5 0.1)", "oklch(a b c)", "oklch(0.5 0.1 20"] {
            assert!(OklchColor::parse(src).is_err(), "{src} should not parse");
        }
    }

    #[test]
    fn achromatic_extremes_map_to_black_and_white() {
        assert_eq!(OklchColor::BLACK.to_srgb_hex(), "#000000");
        assert_eq!(OklchColor::WHITE.to_srgb_hex(), "#ffffff");
    }

    #[test]
    fn out_of_gamut_is_clipped() {
        let [r, g, b] = OklchColor::new(0.75, 0.4, 135.0).to_srgb();
        for ch in [r, g, b] {
            assert!((0.0..=1.0).contains(&ch));
        }
    }
}
