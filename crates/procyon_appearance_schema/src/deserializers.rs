use serde::{Deserialize, Deserializer, de::Error};

use crate::{Color, FontSize};

pub fn de_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let literal = String::deserialize(deserializer)?;
    Color::parse(literal).map_err(D::Error::custom)
}

pub fn de_font_size<'de, D>(deserializer: D) -> Result<FontSize, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(string) => {
            let points = match string.strip_suffix("pt") {
                Some(points) => points,
                None => return Err(D::Error::custom("expected string to end with 'pt'")),
            };

            match points.parse::<u32>().ok().and_then(FontSize::new) {
                Some(size) => Ok(size),
                None => Err(D::Error::custom(
                    "could not convert string into a positive point size",
                )),
            }
        }

        StringOrInt::Int(points) => u32::try_from(points)
            .ok()
            .and_then(FontSize::new)
            .ok_or_else(|| D::Error::custom("font size must be a positive number of points")),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    String(String),
    Int(i64),
}
