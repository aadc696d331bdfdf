use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};

use crate::{AppearanceError, NamedColor};

/// A color literal together with the ARGB value it resolves to.
///
/// The literal is kept exactly as written so hosts that take color strings
/// receive the same text the table defines. Accepted forms are a
/// [`NamedColor`] keyword or a `#RGB`, `#RRGGBB` or `#AARRGGBB` code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    literal: String,
    argb: u32,
}

impl Color {
    pub fn parse(literal: impl Into<String>) -> Result<Color, AppearanceError> {
        let literal = literal.into();

        let argb = match literal.strip_prefix('#') {
            Some(digits) => parse_hex(digits),
            None => NamedColor::from_name(&literal).map(|named| named.argb()),
        };

        match argb {
            Some(argb) => Ok(Color { literal, argb }),
            None => Err(AppearanceError::InvalidColor { literal }),
        }
    }

    /// The literal as defined, e.g. `"SteelBlue"` or `"#154682B4"`.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    pub fn argb(&self) -> u32 {
        self.argb
    }

    pub fn alpha(&self) -> u8 {
        self.argb.to_be_bytes()[0]
    }

    /// The color channels without alpha, as `0xRRGGBB`.
    pub fn rgb(&self) -> u32 {
        self.argb & 0x00FF_FFFF
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }

    /// The keyword this color was written as, if any.
    pub fn named(&self) -> Option<NamedColor> {
        if self.literal.starts_with('#') {
            return None;
        }

        NamedColor::from_name(&self.literal)
    }

    /// Whether the literal is the 8-digit `#AARRGGBB` form.
    pub fn is_hex_with_alpha(&self) -> bool {
        self.literal.len() == 9 && self.literal.starts_with('#')
    }
}

fn parse_hex(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }

    let value = u32::from_str_radix(digits, 16).ok()?;

    match digits.len() {
        3 => {
            let [_, _, high, low] = value.to_be_bytes();
            let (r, g, b) = (u32::from(high), u32::from(low >> 4), u32::from(low & 0xF));
            Some(0xFF00_0000 | ((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11))
        }
        6 => Some(0xFF00_0000 | value),
        8 => Some(value),
        _ => None,
    }
}

impl FromStr for Color {
    type Err = AppearanceError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        Color::parse(literal)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color {
            literal: named.name().to_owned(),
            argb: named.argb(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        &self.literal
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.literal)
    }
}
