use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default palette, indexed when a colour is given as a plain number.
pub const COLOR_PALETTE: [[u8; 4]; 12] = [
    [255, 0, 0, 255],     // Red
    [0, 255, 0, 255],     // Green
    [0, 0, 255, 255],     // Blue
    [255, 255, 0, 255],   // Yellow
    [255, 0, 255, 255],   // Magenta
    [0, 255, 255, 255],   // Cyan
    [255, 165, 0, 255],   // Orange
    [128, 0, 128, 255],   // Purple
    [0, 128, 0, 255],     // Dark Green
    [0, 0, 128, 255],     // Navy
    [255, 192, 203, 255], // Pink
    [165, 42, 42, 255],   // Brown
];

const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0, 0, 0, 255]),
    ("white", [255, 255, 255, 255]),
    ("red", [255, 0, 0, 255]),
    ("green", [0, 128, 0, 255]),
    ("lime", [0, 255, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("fuchsia", [255, 0, 255, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("aqua", [0, 255, 255, 255]),
    ("orange", [255, 165, 0, 255]),
    ("purple", [128, 0, 128, 255]),
    ("navy", [0, 0, 128, 255]),
    ("pink", [255, 192, 203, 255]),
    ("brown", [165, 42, 42, 255]),
    ("gray", [128, 128, 128, 255]),
    ("grey", [128, 128, 128, 255]),
    ("silver", [192, 192, 192, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("olive", [128, 128, 0, 255]),
    ("teal", [0, 128, 128, 255]),
    ("transparent", [0, 0, 0, 0]),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("empty colour value")]
    Empty,
    #[error("unknown colour name: {0}")]
    UnknownName(String),
    #[error("invalid hex colour: {0}")]
    InvalidHex(String),
    #[error("invalid rgb()/rgba() colour: {0}")]
    InvalidFunction(String),
}

/// An RGBA colour attribute assigned to a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "String")]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const RED: Color = Color([255, 0, 0, 255]);
    pub const GREEN: Color = Color([0, 128, 0, 255]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color([r, g, b, 255])
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color([r, g, b, a])
    }

    pub fn for_index(index: usize) -> Self {
        Color(COLOR_PALETTE[index % COLOR_PALETTE.len()])
    }

    pub fn is_opaque(&self) -> bool {
        self.0[3] == 255
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.0;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        if let Some(args) = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
        {
            let Some(args) = args.strip_suffix(')') else {
                return Err(ColorParseError::InvalidFunction(s.to_string()));
            };
            return parse_function(args).ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rgba)| Color(*rgba))
            .ok_or(ColorParseError::UnknownName(value))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let nibble = c.to_digit(16)? as u8;
                *slot = nibble * 17;
            }
            Some(Color::rgb(rgb[0], rgb[1], rgb[2]))
        }
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Parses the argument list of `rgb(r, g, b)` or `rgba(r, g, b, a)` where
/// alpha is a fraction in `0..=1`.
fn parse_function(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |p: &str| -> Option<u8> {
        let v = p.parse::<f64>().ok()?;
        v.is_finite().then(|| v.round().clamp(0.0, 255.0) as u8)
    };
    let alpha = match parts.get(3) {
        Some(p) => {
            let a = p.parse::<f64>().ok().filter(|a| a.is_finite())?;
            (a.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        None => 255,
    };
    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Index(usize),
    Text(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = ColorParseError;

    fn try_from(value: ColorRepr) -> Result<Self, Self::Error> {
        match value {
            ColorRepr::Index(index) => Ok(Color::for_index(index)),
            ColorRepr::Text(text) => text.parse(),
        }
    }
}
