use serde::{Deserialize, Deserializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoSizeError {
    #[error("Invalid photo size: {0}")]
    InvalidSize(String),
}

/// Pas foto sizes offered by the service detail form, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSize {
    TwoByThree,
    ThreeByFour,
    FourBySix,
    Custom,
}

impl fmt::Display for PhotoSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size_str = match self {
            PhotoSize::TwoByThree => "2x3",
            PhotoSize::ThreeByFour => "3x4",
            PhotoSize::FourBySix => "4x6",
            PhotoSize::Custom => "Custom",
        };
        write!(f, "{size_str}")
    }
}

impl FromStr for PhotoSize {
    type Err = PhotoSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2x3" => Ok(PhotoSize::TwoByThree),
            "3x4" => Ok(PhotoSize::ThreeByFour),
            "4x6" => Ok(PhotoSize::FourBySix),
            "custom" => Ok(PhotoSize::Custom),
            _ => Err(PhotoSizeError::InvalidSize(s.to_string())),
        }
    }
}

/// Area of a rectangle given in centimetres, in cm².
pub fn area_cm2(width_cm: f64, height_cm: f64) -> f64 {
    width_cm * height_cm
}

/// Area of a rectangle given in metres, in m².
pub fn area_m2(length_m: f64, width_m: f64) -> f64 {
    length_m * width_m
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

/// Accepts a JSON number or a numeric string. Anything that does not parse
/// to a finite number reads as zero.
pub fn deserialize_dimension<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LooseNumber::Number(n) => finite_or_zero(n),
        LooseNumber::Text(s) => parse_dimension(&s),
        LooseNumber::Other(_) => 0.0,
    }))
}

pub fn parse_dimension(value: &str) -> f64 {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() { n } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_size_parses_case_insensitively() {
        assert_eq!("4x6".parse::<PhotoSize>().unwrap(), PhotoSize::FourBySix);
        assert_eq!("custom".parse::<PhotoSize>().unwrap(), PhotoSize::Custom);
        assert_eq!("Custom".parse::<PhotoSize>().unwrap(), PhotoSize::Custom);
        assert!("5x7".parse::<PhotoSize>().is_err());
    }

    #[test]
    fn photo_size_displays_form_labels() {
        assert_eq!(PhotoSize::TwoByThree.to_string(), "2x3");
        assert_eq!(PhotoSize::Custom.to_string(), "Custom");
    }

    #[test]
    fn parse_dimension_degrades_to_zero() {
        assert_eq!(parse_dimension("3.5"), 3.5);
        assert_eq!(parse_dimension("2,5"), 2.5);
        assert_eq!(parse_dimension("abc"), 0.0);
        assert_eq!(parse_dimension(""), 0.0);
        assert_eq!(parse_dimension("inf"), 0.0);
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_dimension")]
        width: Option<f64>,
    }

    #[test]
    fn dimension_accepts_numbers_and_strings() {
        let h: Holder = serde_json::from_str(r#"{"width": 3}"#).unwrap();
        assert_eq!(h.width, Some(3.0));
        let h: Holder = serde_json::from_str(r#"{"width": "4.5"}"#).unwrap();
        assert_eq!(h.width, Some(4.5));
        let h: Holder = serde_json::from_str(r#"{"width": "wide"}"#).unwrap();
        assert_eq!(h.width, Some(0.0));
        let h: Holder = serde_json::from_str(r#"{"width": true}"#).unwrap();
        assert_eq!(h.width, Some(0.0));
        let h: Holder = serde_json::from_str(r#"{"width": null}"#).unwrap();
        assert_eq!(h.width, None);
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.width, None);
    }
}
