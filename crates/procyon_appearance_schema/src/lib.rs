//! Schema for Procyon appearance tables: the colors and font sizes the UI
//! is themed with, and the rules for parsing them.

use serde::{Deserialize, Serialize};

mod color;
pub use color::*;

mod deserializers;
use deserializers::{de_color, de_font_size};

mod error;
pub use error::*;

mod font_size;
pub use font_size::*;

mod named;
pub use named::*;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Appearance {
    pub name: String,
    pub colors: AppearanceColors,
    pub fonts: AppearanceFonts,
}

impl Appearance {
    pub fn from_json<S: AsRef<str>>(str: S) -> Result<Appearance, AppearanceError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppearanceColors {
    /// Invisible fill.
    #[serde(deserialize_with = "de_color")]
    pub transparent: Color,
    /// Default background.
    #[serde(deserialize_with = "de_color")]
    pub base: Color,
    /// Background of editable surfaces.
    #[serde(deserialize_with = "de_color")]
    pub editor: Color,
    #[serde(deserialize_with = "de_color")]
    pub selection: Color,
    #[serde(deserialize_with = "de_color")]
    pub hover: Color,
    /// Overlay drawn on top of hovered content.
    #[serde(deserialize_with = "de_color")]
    pub hover_transparent: Color,
    #[serde(deserialize_with = "de_color")]
    pub border_light: Color,
    #[serde(deserialize_with = "de_color")]
    pub text: Color,
    /// Text drawn on top of `selection`.
    #[serde(deserialize_with = "de_color")]
    pub text_selected: Color,
    /// De-emphasized text.
    #[serde(deserialize_with = "de_color")]
    pub text_modest: Color,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppearanceFonts {
    #[serde(deserialize_with = "de_font_size")]
    pub default_ui: FontSize,
    #[serde(deserialize_with = "de_font_size")]
    pub small_ui: FontSize,
}
