//! Color engine: hex/RGB/HSL conversion, saturation and lightness
//! modification, and palette interpolation for severity legends.

use relief_core::{Bounds, Callable};

// ============================================================================
// ERRORS
// ============================================================================

/// Failure to build a color from caller input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a `#rrggbb` string
    InvalidHex(String),
    /// A color scale needs at least one palette entry
    EmptyPalette,
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex(hex) => write!(f, "invalid hex color: {:?}", hex),
            Self::EmptyPalette => write!(f, "color palette is empty"),
        }
    }
}

impl std::error::Error for ColorError {}

// ============================================================================
// COLOR TYPES
// ============================================================================

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

// ============================================================================
// HEX <-> RGB
// ============================================================================

pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

// ============================================================================
// RGB <-> HSL
// ============================================================================

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let l = (max + min) / 2.0;

    // Achromatic
    if diff == 0.0 {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = diff / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / diff).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / diff + 2.0)
    } else {
        60.0 * ((r - g) / diff + 4.0)
    };

    Hsl::new(h, s.min(1.0), l)
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

fn unit_to_255(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s.clamp(0.0, 1.0);
    let l = hsl.l.clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match sector.floor() as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(unit_to_255(r + m), unit_to_255(g + m), unit_to_255(b + m))
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

// ============================================================================
// SATURATION / LIGHTNESS
// ============================================================================

/// Scale saturation and lightness by multipliers, capped at 1
///
/// Each modifier is a literal multiplier or a function of the current
/// component. With no modifiers, or unparsable input, `hex` is returned as is.
pub fn modify_hex_sl(
    hex: &str,
    s_modifier: Option<Callable<'_, f64>>,
    l_modifier: Option<Callable<'_, f64>>,
) -> String {
    if s_modifier.is_none() && l_modifier.is_none() {
        return hex.to_string();
    }

    let hsl = match hex_to_hsl(hex) {
        Ok(hsl) => hsl,
        Err(e) => {
            tracing::warn!("Cannot modify color: {}", e);
            return hex.to_string();
        }
    };

    hsl_to_hex(Hsl::new(
        hsl.h,
        apply_modifier(hsl.s, s_modifier),
        apply_modifier(hsl.l, l_modifier),
    ))
}

fn apply_modifier(value: f64, modifier: Option<Callable<'_, f64>>) -> f64 {
    match modifier {
        Some(modifier) => (value * modifier.resolve(value)).min(1.0),
        None => value,
    }
}

// ============================================================================
// INTERPOLATION
// ============================================================================

/// Channel between `from` and `to` at `factor`, rounded and clamped
pub fn interpolate_255(from: u8, to: u8, factor: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    (from + (to - from) * factor).round().clamp(0.0, 255.0) as u8
}

pub fn interpolate_rgb(from: Rgb, to: Rgb, factor: f64) -> Rgb {
    let [r0, g0, b0] = from.channels();
    let [r1, g1, b1] = to.channels();
    Rgb::new(
        interpolate_255(r0, r1, factor),
        interpolate_255(g0, g1, factor),
        interpolate_255(b0, b1, factor),
    )
}

pub fn interpolate_hex_color(from: &str, to: &str, factor: f64) -> Result<String, ColorError> {
    let from = hex_to_rgb(from)?;
    let to = hex_to_rgb(to)?;
    Ok(rgb_to_hex(interpolate_rgb(from, to, factor)))
}

// ============================================================================
// COLOR SCALE
// ============================================================================

/// Maps a numeric domain onto an ordered palette, blending between entries
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    domain: Bounds,
    palette: Vec<String>,
    rgb: Vec<Rgb>,
}

impl ColorScale {
    pub fn new<S: AsRef<str>>(domain: Bounds, palette: &[S]) -> Result<Self, ColorError> {
        if palette.is_empty() {
            return Err(ColorError::EmptyPalette);
        }

        let rgb = palette
            .iter()
            .map(|hex| hex_to_rgb(hex.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            domain,
            palette: palette.iter().map(|hex| hex.as_ref().to_string()).collect(),
            rgb,
        })
    }

    pub fn domain(&self) -> Bounds {
        self.domain
    }

    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Fractional palette position of `value`
    fn index_of(&self, value: f64) -> f64 {
        let last = (self.palette.len() - 1) as f64;
        let size = self.domain.size();
        if size == 0.0 {
            return 0.0;
        }

        let index = (value - self.domain.min) / size * last;
        if index.is_nan() { 0.0 } else { index.clamp(0.0, last) }
    }

    /// Color for `value`, optionally S/L-modified
    ///
    /// Values landing exactly on a palette index return that entry verbatim.
    pub fn color(
        &self,
        value: f64,
        s_modifier: Option<Callable<'_, f64>>,
        l_modifier: Option<Callable<'_, f64>>,
    ) -> String {
        let index = self.index_of(value);
        let lower = index.floor() as usize;
        let fraction = index - index.floor();

        if fraction == 0.0 {
            return modify_hex_sl(&self.palette[lower], s_modifier, l_modifier);
        }

        let blended = interpolate_rgb(self.rgb[lower], self.rgb[lower + 1], fraction);
        modify_hex_sl(&rgb_to_hex(blended), s_modifier, l_modifier)
    }
}

/// Build a [`ColorScale`] over `domain`
pub fn get_color_scale_function<S: AsRef<str>>(
    domain: Bounds,
    palette: &[S],
) -> Result<ColorScale, ColorError> {
    ColorScale::new(domain, palette)
}

// ============================================================================
// TESTS
// ============================================================================
