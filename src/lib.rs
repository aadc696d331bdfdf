pub mod appearance;
pub use appearance::{
    Appearance, AppearanceError, AppearanceKey, AppearanceTable, AppearanceValue, Color,
    ColorKey, DEFAULT, FontSize, FontSizeKey, NamedColor, Namespace, NamespaceView,
};

mod accessors;
pub use accessors::{application, plugin};
