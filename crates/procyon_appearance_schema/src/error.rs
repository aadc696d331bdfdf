use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppearanceError {
    #[error("\"{literal}\" is not a color name or a #RGB, #RRGGBB or #AARRGGBB code.")]
    InvalidColor { literal: String },

    #[error("\"{literal}\" is not a positive font size in points.")]
    InvalidFontSize { literal: String },

    #[error("Could not parse the appearance table: {0}")]
    Json(#[from] serde_json::Error),
}
