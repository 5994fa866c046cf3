use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Straight (non-premultiplied) RGBA8 color. Serialized as a hex string.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("unsupported color length {len} in {value:?}")]
    InvalidLength { value: String, len: usize },
    #[error("invalid hex digit in {0:?}")]
    InvalidDigit(String),
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn parse(value: &str) -> Result<Self, ColorParseError> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(value.to_string()))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(value.to_string()));
        }
        let nibble = |index: usize| u8::from_str_radix(&digits[index..index + 1], 16).unwrap_or(0);
        let byte = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).unwrap_or(0);
        match digits.len() {
            3 => Ok(Self::rgb(nibble(0) * 17, nibble(1) * 17, nibble(2) * 17)),
            6 => Ok(Self::rgb(byte(0), byte(2), byte(4))),
            8 => Ok(Self::rgba(byte(0), byte(2), byte(4), byte(6))),
            len => Err(ColorParseError::InvalidLength {
                value: value.to_string(),
                len,
            }),
        }
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Hex form accepted by canvas `fillStyle` / `strokeStyle`.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
