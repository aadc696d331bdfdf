#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use procyon_appearance_macros::IntoAppearanceField;
use serde::Serialize;

use crate::appearance::{Appearance, Color, FontSize};

/// Color constants, in the order the application defines them.
///
/// `name()` is the accessor name the UI declarations use. `in_plugin()` is
/// true for keys the QML plugin also exposes.
#[derive(IntoAppearanceField, Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(Color)]
#[func(pub const fn name(&self) -> &'static str)]
#[func(pub const fn in_plugin(&self) -> bool)]
pub enum ColorKey {
    #[appearance(colors.transparent)]
    #[assoc(name = "transparentColor")]
    #[assoc(in_plugin = false)]
    TransparentColor,
    #[appearance(colors.base)]
    #[assoc(name = "baseColor")]
    #[assoc(in_plugin = true)]
    BaseColor,
    #[appearance(colors.editor)]
    #[assoc(name = "editorColor")]
    #[assoc(in_plugin = true)]
    EditorColor,
    #[appearance(colors.selection)]
    #[assoc(name = "selectionColor")]
    #[assoc(in_plugin = true)]
    SelectionColor,
    #[appearance(colors.hover)]
    #[assoc(name = "hoverColor")]
    #[assoc(in_plugin = false)]
    HoverColor,
    #[appearance(colors.hover_transparent)]
    #[assoc(name = "hoverColorTransparent")]
    #[assoc(in_plugin = false)]
    HoverColorTransparent,
    #[appearance(colors.border_light)]
    #[assoc(name = "borderColorLight")]
    #[assoc(in_plugin = false)]
    BorderColorLight,
    #[appearance(colors.text)]
    #[assoc(name = "textColor")]
    #[assoc(in_plugin = true)]
    TextColor,
    #[appearance(colors.text_selected)]
    #[assoc(name = "textColorSelected")]
    #[assoc(in_plugin = true)]
    TextColorSelected,
    #[appearance(colors.text_modest)]
    #[assoc(name = "textColorModest")]
    #[assoc(in_plugin = true)]
    TextColorModest,
}

/// Font size constants. Both are shared by every namespace.
#[derive(IntoAppearanceField, Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[field(FontSize)]
#[func(pub const fn name(&self) -> &'static str)]
#[func(pub const fn in_plugin(&self) -> bool)]
pub enum FontSizeKey {
    #[appearance(fonts.default_ui)]
    #[assoc(name = "fontSizeDefaultUI")]
    #[assoc(in_plugin = true)]
    FontSizeDefaultUi,
    #[appearance(fonts.small_ui)]
    #[assoc(name = "fontSizeSmallUI")]
    #[assoc(in_plugin = true)]
    FontSizeSmallUi,
}

/// Any appearance constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppearanceKey {
    Color(ColorKey),
    FontSize(FontSizeKey),
}

impl AppearanceKey {
    /// Colors first, then font sizes.
    pub const ALL: [AppearanceKey; ColorKey::ALL.len() + FontSizeKey::ALL.len()] = {
        let mut all = [AppearanceKey::FontSize(FontSizeKey::FontSizeDefaultUi);
            ColorKey::ALL.len() + FontSizeKey::ALL.len()];

        let mut i = 0;
        while i < ColorKey::ALL.len() {
            all[i] = AppearanceKey::Color(ColorKey::ALL[i]);
            i += 1;
        }

        let mut j = 0;
        while j < FontSizeKey::ALL.len() {
            all[i + j] = AppearanceKey::FontSize(FontSizeKey::ALL[j]);
            j += 1;
        }

        all
    };

    pub const fn name(&self) -> &'static str {
        match self {
            AppearanceKey::Color(key) => key.name(),
            AppearanceKey::FontSize(key) => key.name(),
        }
    }

    pub const fn in_plugin(&self) -> bool {
        match self {
            AppearanceKey::Color(key) => key.in_plugin(),
            AppearanceKey::FontSize(key) => key.in_plugin(),
        }
    }

    /// Finds a key by its exact accessor name, e.g. `"baseColor"`.
    pub fn from_name(name: &str) -> Option<AppearanceKey> {
        Self::ALL.into_iter().find(|key| key.name() == name)
    }

    pub fn resolve<'a>(&self, appearance: &'a Appearance) -> AppearanceValue<'a> {
        match self {
            AppearanceKey::Color(key) => AppearanceValue::Color(key.resolve(appearance)),
            AppearanceKey::FontSize(key) => AppearanceValue::FontSize(*key.resolve(appearance)),
        }
    }
}

impl From<ColorKey> for AppearanceKey {
    fn from(key: ColorKey) -> Self {
        AppearanceKey::Color(key)
    }
}

impl From<FontSizeKey> for AppearanceKey {
    fn from(key: FontSizeKey) -> Self {
        AppearanceKey::FontSize(key)
    }
}

impl fmt::Display for AppearanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved constant, borrowed from its appearance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AppearanceValue<'a> {
    Color(&'a Color),
    FontSize(FontSize),
}

impl<'a> AppearanceValue<'a> {
    pub fn as_color(&self) -> Option<&'a Color> {
        match self {
            AppearanceValue::Color(color) => Some(color),
            AppearanceValue::FontSize(_) => None,
        }
    }

    pub fn as_font_size(&self) -> Option<FontSize> {
        match self {
            AppearanceValue::Color(_) => None,
            AppearanceValue::FontSize(size) => Some(*size),
        }
    }
}

impl fmt::Display for AppearanceValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppearanceValue::Color(color) => fmt::Display::fmt(color, f),
            AppearanceValue::FontSize(size) => fmt::Display::fmt(size, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT;

    #[test]
    fn test_color_key_resolves_every_field() {
        let colors = &DEFAULT.colors;
        let expected = [
            &colors.transparent,
            &colors.base,
            &colors.editor,
            &colors.selection,
            &colors.hover,
            &colors.hover_transparent,
            &colors.border_light,
            &colors.text,
            &colors.text_selected,
            &colors.text_modest,
        ];

        for (key, field) in ColorKey::ALL.iter().zip(expected) {
            assert!(
                std::ptr::eq(key.resolve(&DEFAULT), field),
                "{} resolved to the wrong field",
                key.name()
            );
        }
    }

    #[test]
    fn test_font_size_key_resolves_every_field() {
        assert_eq!(
            *FontSizeKey::FontSizeDefaultUi.resolve(&DEFAULT),
            DEFAULT.fonts.default_ui
        );
        assert_eq!(
            *FontSizeKey::FontSizeSmallUi.resolve(&DEFAULT),
            DEFAULT.fonts.small_ui
        );
    }

    #[test]
    fn test_all_keys_in_declaration_order() {
        let names: Vec<_> = AppearanceKey::ALL.iter().map(AppearanceKey::name).collect();
        assert_eq!(
            names,
            [
                "transparentColor",
                "baseColor",
                "editorColor",
                "selectionColor",
                "hoverColor",
                "hoverColorTransparent",
                "borderColorLight",
                "textColor",
                "textColorSelected",
                "textColorModest",
                "fontSizeDefaultUI",
                "fontSizeSmallUI",
            ]
        );
    }

    #[test]
    fn test_names_are_unique() {
        for (index, key) in AppearanceKey::ALL.iter().enumerate() {
            assert!(
                !AppearanceKey::ALL[index + 1..]
                    .iter()
                    .any(|other| other.name() == key.name()),
                "{key} is defined twice"
            );
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            AppearanceKey::from_name("hoverColorTransparent"),
            Some(AppearanceKey::Color(ColorKey::HoverColorTransparent))
        );
        assert_eq!(
            AppearanceKey::from_name("fontSizeSmallUI"),
            Some(AppearanceKey::FontSize(FontSizeKey::FontSizeSmallUi))
        );
    }

    #[test]
    fn test_from_name_is_exact() {
        assert_eq!(AppearanceKey::from_name("basecolor"), None);
        assert_eq!(AppearanceKey::from_name("base_color"), None);
        assert_eq!(AppearanceKey::from_name("fontSizeSmallUi"), None);
        assert_eq!(AppearanceKey::from_name(""), None);
    }

    #[test]
    fn test_plugin_membership() {
        let plugin: Vec<_> = AppearanceKey::ALL
            .iter()
            .filter(|key| key.in_plugin())
            .map(AppearanceKey::name)
            .collect();

        assert_eq!(
            plugin,
            [
                "baseColor",
                "editorColor",
                "selectionColor",
                "textColor",
                "textColorSelected",
                "textColorModest",
                "fontSizeDefaultUI",
                "fontSizeSmallUI",
            ]
        );
    }

    #[test]
    fn test_value_accessors() {
        let color = AppearanceKey::Color(ColorKey::BaseColor).resolve(&DEFAULT);
        assert_eq!(color.as_color().map(Color::as_str), Some("Gainsboro"));
        assert_eq!(color.as_font_size(), None);
        assert_eq!(color.to_string(), "Gainsboro");

        let size = AppearanceKey::FontSize(FontSizeKey::FontSizeSmallUi).resolve(&DEFAULT);
        assert_eq!(size.as_font_size().map(FontSize::points), Some(8));
        assert_eq!(size.as_color(), None);
        assert_eq!(size.to_string(), "8");
    }
}
