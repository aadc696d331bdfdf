//! The appearance table the UI is themed with: colors and font sizes,
//! addressed by typed keys and grouped into namespaces.
//!
//! Every constant lives in one table. The namespaces the UI sub-trees import
//! are views over it, so the same name always yields the same value.

pub use procyon_appearance_schema::{
    Appearance, AppearanceColors, AppearanceError, AppearanceFonts, Color, FontSize, NamedColor,
};

mod builtin;
pub use builtin::*;

mod kinds;
pub use kinds::*;

mod namespace;
pub use namespace::*;
