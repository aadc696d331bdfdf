use crate::appearance::{AppearanceKey, Color, ColorKey, DEFAULT, FontSize, FontSizeKey, Namespace};

// Each accessor is checked at compile time against the namespace it is
// generated into.
macro_rules! color_accessors {
    ( $namespace:expr; $( $(#[$meta:meta])* $accessor:ident => $key:ident ),+ $(,)? ) => {
        $(
            const _: () = assert!($namespace.contains(AppearanceKey::Color(ColorKey::$key)));

            $(#[$meta])*
            pub fn $accessor() -> &'static Color {
                ColorKey::$key.resolve(&DEFAULT)
            }
        )+
    };
}

macro_rules! font_size_accessors {
    ( $namespace:expr; $( $(#[$meta:meta])* $accessor:ident => $key:ident ),+ $(,)? ) => {
        $(
            const _: () = assert!($namespace.contains(AppearanceKey::FontSize(FontSizeKey::$key)));

            $(#[$meta])*
            pub fn $accessor() -> FontSize {
                *FontSizeKey::$key.resolve(&DEFAULT)
            }
        )+
    };
}

/// Constants for the desktop application UI.
pub mod application {
    use super::*;

    color_accessors!(
        Namespace::Application;
        /// Fully transparent white.
        transparent_color => TransparentColor,
        /// Default background.
        base_color => BaseColor,
        /// Background of editable surfaces.
        editor_color => EditorColor,
        selection_color => SelectionColor,
        hover_color => HoverColor,
        /// SteelBlue at low opacity, drawn over hovered content.
        hover_color_transparent => HoverColorTransparent,
        border_color_light => BorderColorLight,
        text_color => TextColor,
        /// Text drawn on top of [`selection_color`].
        text_color_selected => TextColorSelected,
        /// De-emphasized text.
        text_color_modest => TextColorModest,
    );

    font_size_accessors!(
        Namespace::Application;
        font_size_default_ui => FontSizeDefaultUi,
        font_size_small_ui => FontSizeSmallUi,
    );
}

/// Constants for the QML plugin UI.
pub mod plugin {
    use super::*;

    color_accessors!(
        Namespace::Plugin;
        /// Default background.
        base_color => BaseColor,
        /// Background of editable surfaces.
        editor_color => EditorColor,
        selection_color => SelectionColor,
        text_color => TextColor,
        /// Text drawn on top of [`selection_color`].
        text_color_selected => TextColorSelected,
        /// De-emphasized text.
        text_color_modest => TextColorModest,
    );

    font_size_accessors!(
        Namespace::Plugin;
        font_size_default_ui => FontSizeDefaultUi,
        font_size_small_ui => FontSizeSmallUi,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    type ColorAccessor = fn() -> &'static Color;

    const APPLICATION_COLORS: [(&str, ColorAccessor); 10] = [
        ("transparentColor", application::transparent_color),
        ("baseColor", application::base_color),
        ("editorColor", application::editor_color),
        ("selectionColor", application::selection_color),
        ("hoverColor", application::hover_color),
        ("hoverColorTransparent", application::hover_color_transparent),
        ("borderColorLight", application::border_color_light),
        ("textColor", application::text_color),
        ("textColorSelected", application::text_color_selected),
        ("textColorModest", application::text_color_modest),
    ];

    const PLUGIN_COLORS: [(&str, ColorAccessor); 6] = [
        ("baseColor", plugin::base_color),
        ("editorColor", plugin::editor_color),
        ("selectionColor", plugin::selection_color),
        ("textColor", plugin::text_color),
        ("textColorSelected", plugin::text_color_selected),
        ("textColorModest", plugin::text_color_modest),
    ];

    #[test]
    fn test_application_values() {
        assert_eq!(application::transparent_color().as_str(), "#00FFFFFF");
        assert_eq!(application::base_color().as_str(), "Gainsboro");
        assert_eq!(application::editor_color().as_str(), "White");
        assert_eq!(application::selection_color().as_str(), "SteelBlue");
        assert_eq!(application::hover_color().as_str(), "AliceBlue");
        assert_eq!(application::hover_color_transparent().as_str(), "#154682B4");
        assert_eq!(application::border_color_light().as_str(), "Silver");
        assert_eq!(application::text_color().as_str(), "Black");
        assert_eq!(application::text_color_selected().as_str(), "White");
        assert_eq!(application::text_color_modest().as_str(), "Gray");
        assert_eq!(application::font_size_default_ui().points(), 10);
        assert_eq!(application::font_size_small_ui().points(), 8);
    }

    #[test]
    fn test_plugin_values() {
        assert_eq!(plugin::base_color().as_str(), "Gainsboro");
        assert_eq!(plugin::editor_color().as_str(), "White");
        assert_eq!(plugin::selection_color().as_str(), "SteelBlue");
        assert_eq!(plugin::text_color().as_str(), "Black");
        assert_eq!(plugin::text_color_selected().as_str(), "White");
        assert_eq!(plugin::text_color_modest().as_str(), "Gray");
        assert_eq!(plugin::font_size_default_ui().points(), 10);
        assert_eq!(plugin::font_size_small_ui().points(), 8);
    }

    #[test]
    fn test_accessors_are_deterministic() {
        for (name, accessor) in APPLICATION_COLORS.iter().chain(PLUGIN_COLORS.iter()) {
            let first = accessor();
            let second = accessor();
            assert_eq!(first, second, "{name} changed between calls");
            assert!(std::ptr::eq(first, second), "{name} is not the shared table entry");
        }

        assert_eq!(application::font_size_default_ui(), application::font_size_default_ui());
        assert_eq!(plugin::font_size_small_ui(), plugin::font_size_small_ui());
    }

    #[test]
    fn test_accessor_names_match_keys() {
        for (name, accessor) in APPLICATION_COLORS.iter().chain(PLUGIN_COLORS.iter()) {
            let Some(AppearanceKey::Color(key)) = AppearanceKey::from_name(name) else {
                panic!("{name} is not a color key");
            };
            assert_eq!(key.resolve(&DEFAULT), accessor(), "{name}");
        }
    }

    #[test]
    fn test_colors_are_named_or_hex_with_alpha() {
        for (name, accessor) in APPLICATION_COLORS {
            let color = accessor();
            assert!(
                color.named().is_some() || color.is_hex_with_alpha(),
                "{name} = {color} is neither a color name nor #AARRGGBB"
            );
        }
    }

    #[test]
    fn test_font_sizes_are_ordered() {
        assert!(application::font_size_small_ui().points() > 0);
        assert!(application::font_size_small_ui() < application::font_size_default_ui());
        assert!(plugin::font_size_small_ui() < plugin::font_size_default_ui());
    }

    #[test]
    fn test_plugin_agrees_with_application() {
        for (name, accessor) in PLUGIN_COLORS {
            let (_, application_accessor) = APPLICATION_COLORS
                .iter()
                .find(|(application_name, _)| *application_name == name)
                .unwrap();
            assert_eq!(accessor(), application_accessor(), "{name}");
        }

        assert_eq!(plugin::font_size_default_ui(), application::font_size_default_ui());
        assert_eq!(plugin::font_size_small_ui(), application::font_size_small_ui());
    }

    #[test]
    fn test_transparent_color_is_invisible_white() {
        let color = application::transparent_color();
        assert!(color.is_transparent());
        assert_eq!(color.rgb(), 0xFFFFFF);
    }

    #[test]
    fn test_hover_overlay_is_faint_selection_color() {
        let overlay = application::hover_color_transparent();
        assert_eq!(overlay.alpha(), 0x15, "about 8% opacity");
        assert_eq!(overlay.rgb(), application::selection_color().rgb());
    }

    #[test]
    fn test_selected_text_contrasts_with_text() {
        assert_eq!(application::text_color_selected().as_str(), "White");
        assert_eq!(application::text_color().as_str(), "Black");
        assert_ne!(application::text_color_selected(), application::text_color());
    }
}
