//! Color parsing and gradient interpolation.
//!
//! Everything here is free of slider state so it can be used (and tested)
//! on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of colors generated between the two gradient endpoints.
pub const INTERMEDIATE_STOPS: usize = 4;

/// Total number of stops in a gradient (both endpoints included).
pub const STOP_COUNT: usize = INTERMEDIATE_STOPS + 2;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Notation a color string was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// `#RGB` or `#RRGGBB`.
    Hex,
    /// `rgb(r, g, b)` or `rgb(r g b)`.
    Rgb,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` or `#RGB` string.
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(input.to_string()));
        }

        let expanded = match hex.len() {
            6 => hex.to_string(),
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(Error::InvalidColorFormat(input.to_string())),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|_| Error::InvalidColorFormat(input.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Parse CSS `rgb()` notation, with comma or space separated channels.
    pub fn from_rgb_notation(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidColorFormat(input.to_string());

        let inner = input
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let channels = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u8>().map_err(|_| invalid()))
            .collect::<Result<Vec<u8>>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }

    /// Uppercase `#RRGGBB` representation.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels as fractions in `[0, 1]`, for renderers working in floats.
    pub fn to_f32(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    /// Per-channel linear interpolation, rounded to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({} {} {})", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

/// Detect which notation a color string uses.
pub fn detect_format(color: &str) -> Result<ColorFormat> {
    let color = color.trim();

    if color.starts_with("rgb(") && color.ends_with(')') {
        return Ok(ColorFormat::Rgb);
    }

    if let Some(hex) = color.strip_prefix('#') {
        if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(ColorFormat::Hex);
        }
    }

    Err(Error::InvalidColorFormat(color.to_string()))
}

/// Parse a color written in any supported notation.
pub fn parse_color(color: &str) -> Result<Rgb> {
    match detect_format(color)? {
        ColorFormat::Hex => Rgb::from_hex(color),
        ColorFormat::Rgb => Rgb::from_rgb_notation(color),
    }
}

/// Evenly spaced colors strictly between `from` and `to`.
pub fn intermediate_colors(from: Rgb, to: Rgb) -> [Rgb; INTERMEDIATE_STOPS] {
    let divisions = (INTERMEDIATE_STOPS + 1) as f64;
    std::array::from_fn(|i| from.lerp(to, (i + 1) as f64 / divisions))
}

/// Ordered gradient stops: the two endpoints with the intermediates between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStops {
    stops: [Rgb; STOP_COUNT],
}

impl ColorStops {
    pub fn new(from: Rgb, to: Rgb) -> Self {
        let middle = intermediate_colors(from, to);
        let mut stops = [from; STOP_COUNT];
        stops[1..=INTERMEDIATE_STOPS].copy_from_slice(&middle);
        stops[STOP_COUNT - 1] = to;
        Self { stops }
    }

    /// Build stops from two color strings.
    pub fn parse(from: &str, to: &str) -> Result<Self> {
        Ok(Self::new(parse_color(from)?, parse_color(to)?))
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Gradient offset of the stop at `index`, in `[0, 1]`.
    pub fn offset(&self, index: usize) -> f64 {
        index as f64 / (self.stops.len() - 1) as f64
    }

    /// Iterate `(offset, color)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, Rgb)> + '_ {
        self.stops
            .iter()
            .enumerate()
            .map(|(i, color)| (self.offset(i), *color))
    }

    /// Color at `progress` along the gradient, blending the two nearest stops.
    pub fn color_at(&self, progress: f64) -> Rgb {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };

        let index = progress * (self.stops.len() - 1) as f64;
        let start = index.floor() as usize;
        let end = index.ceil() as usize;

        self.stops[start].lerp(self.stops[end], index - start as f64)
    }
}
