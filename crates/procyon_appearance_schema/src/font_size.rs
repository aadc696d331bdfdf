use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::Serialize;

use crate::AppearanceError;

/// A UI font size in whole points. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FontSize(NonZeroU32);

impl FontSize {
    pub const fn new(points: u32) -> Option<FontSize> {
        match NonZeroU32::new(points) {
            Some(points) => Some(FontSize(points)),
            None => None,
        }
    }

    pub const fn points(self) -> u32 {
        self.0.get()
    }
}

/// Parses `"10"` or `"10pt"`.
impl FromStr for FontSize {
    type Err = AppearanceError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let digits = literal.strip_suffix("pt").unwrap_or(literal);

        digits
            .parse::<u32>()
            .ok()
            .and_then(FontSize::new)
            .ok_or_else(|| AppearanceError::InvalidFontSize {
                literal: literal.to_owned(),
            })
    }
}

impl From<FontSize> for u32 {
    fn from(size: FontSize) -> Self {
        size.points()
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}
