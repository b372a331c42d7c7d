use std::time::Duration;

use gpui::{Pixels, SharedString, px};
use serde::{Deserialize, Deserializer, Serializer, de::Error};
use smallvec::SmallVec;

/// Accepts either a CSS font stack (`"'Inter', Helvetica, Arial"`) or a list of family names.
pub fn de_font_stack<'de, D>(deserializer: D) -> Result<SmallVec<[SharedString; 4]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StackOrVec {
        Stack(String),
        Many(SmallVec<[SharedString; 4]>),
    }

    let families: SmallVec<[SharedString; 4]> = match StackOrVec::deserialize(deserializer)? {
        StackOrVec::Stack(stack) => split_font_stack(&stack),
        StackOrVec::Many(vec) => vec
            .into_iter()
            .filter(|family| !family.trim().is_empty())
            .collect(),
    };

    if families.is_empty() {
        return Err(D::Error::custom("font stack can't be empty."));
    }

    Ok(families)
}

pub(crate) fn split_font_stack(stack: &str) -> SmallVec<[SharedString; 4]> {
    stack
        .split(',')
        .map(|family| family.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|family| !family.is_empty())
        .map(|family| SharedString::from(family.to_string()))
        .collect()
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    let pixels = match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let string = match string.strip_suffix("px") {
                Some(string) => string,
                None => return Err(D::Error::custom("expected string to end with 'px'")),
            };

            match string.trim().parse::<f32>() {
                Ok(pixels) => pixels,
                Err(_) => return Err(D::Error::custom("could not convert string into pixels")),
            }
        }

        StringOrFloat::Float(pixels) => pixels,
    };

    if !pixels.is_finite() {
        return Err(D::Error::custom("pixels must be a finite number"));
    }

    Ok(px(pixels))
}

/// Reads a non-negative duration in seconds (`0.3`) that fits a `Duration`.
pub fn de_seconds<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds = f32::deserialize(deserializer)?;

    if seconds < 0. || Duration::try_from_secs_f32(seconds).is_err() {
        return Err(D::Error::custom(
            "seconds must be a finite, non-negative number that fits a duration",
        ));
    }

    Ok(seconds)
}

/// Reads `"35%"` (or an already normalized `0.35`) into a fraction in `0..=1`.
pub fn de_percentage<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let fraction = match StringOrFloat::deserialize(deserializer)? {
        StringOrFloat::String(string) => {
            let Some(string) = string.strip_suffix('%') else {
                return Err(D::Error::custom("expected string to end with '%'"));
            };

            match string.trim().parse::<f32>() {
                Ok(percent) => percent / 100.,
                Err(_) => return Err(D::Error::custom("could not convert string into a percentage")),
            }
        }

        StringOrFloat::Float(fraction) => fraction,
    };

    if !(0.0..=1.0).contains(&fraction) {
        return Err(D::Error::custom("percentage must be between 0% and 100%"));
    }

    Ok(fraction)
}

pub fn ser_percentage<S>(fraction: &f32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_percentage(*fraction))
}

pub(crate) fn format_percentage(fraction: f32) -> String {
    let percent = fraction * 100.;

    if (percent - percent.round()).abs() < 1e-3 {
        format!("{}%", percent.round() as i64)
    } else {
        format!("{percent}%")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}
