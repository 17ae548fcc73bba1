use serde::{Deserialize, Serialize};
use std::fmt;
use typeshare::typeshare;

use crate::utils::unit::deserialize_dimension;

/// Category identifier of a print job. Ids outside the system catalog are
/// admin-created categories and keep their raw id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Print,
    Typing,
    Photo,
    Banner,
    Binding,
    Scan,
    Custom(String),
}

impl Category {
    pub fn id(&self) -> &str {
        match self {
            Category::Print => "print",
            Category::Typing => "typing",
            Category::Photo => "photo",
            Category::Banner => "banner",
            Category::Binding => "binding",
            Category::Scan => "scan",
            Category::Custom(id) => id,
        }
    }

    /// Photo and banner jobs are priced by size, so the form hides binding.
    pub fn offers_binding(&self) -> bool {
        !matches!(self, Category::Photo | Category::Banner)
    }
}

impl From<String> for Category {
    fn from(id: String) -> Self {
        match id.trim().to_lowercase().as_str() {
            "print" => Category::Print,
            "typing" => Category::Typing,
            "photo" => Category::Photo,
            "banner" => Category::Banner,
            "binding" => Category::Binding,
            "scan" => Category::Scan,
            _ => Category::Custom(id),
        }
    }
}

impl From<&str> for Category {
    fn from(id: &str) -> Self {
        Category::from(id.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.id().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum ColorMode {
    #[default]
    Monochrome,
    Color,
}

impl From<String> for ColorMode {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "color" => ColorMode::Color,
            _ => ColorMode::Monochrome,
        }
    }
}

impl From<ColorMode> for String {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Monochrome => "monochrome".to_string(),
            ColorMode::Color => "color".to_string(),
        }
    }
}

/// Binding add-on. The form historically sent `regular` and `book`, both of
/// which are still read.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum BindingMode {
    #[default]
    None,
    Simple,
    Hardcover,
}

impl From<String> for BindingMode {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "simple" | "regular" => BindingMode::Simple,
            "hardcover" | "book" => BindingMode::Hardcover,
            _ => BindingMode::None,
        }
    }
}

impl From<BindingMode> for String {
    fn from(mode: BindingMode) -> Self {
        match mode {
            BindingMode::None => "none".to_string(),
            BindingMode::Simple => "simple".to_string(),
            BindingMode::Hardcover => "hardcover".to_string(),
        }
    }
}

/// Delivery package. `normal` is the form's name for the standard tier.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum DeliveryTier {
    Economy,
    #[default]
    Standard,
    Express,
}

impl From<String> for DeliveryTier {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "express" => DeliveryTier::Express,
            "economy" => DeliveryTier::Economy,
            _ => DeliveryTier::Standard,
        }
    }
}

impl From<DeliveryTier> for String {
    fn from(tier: DeliveryTier) -> Self {
        match tier {
            DeliveryTier::Economy => "economy".to_string(),
            DeliveryTier::Standard => "standard".to_string(),
            DeliveryTier::Express => "express".to_string(),
        }
    }
}

/// One print job as configured in the service detail form.
///
/// The record is flat: photo fields matter only for [`Category::Photo`],
/// banner fields only for [`Category::Banner`], pages and color only for the
/// per-page categories. Missing fields fall back to the calculator defaults
/// (1 page, 1 copy, monochrome, no binding, standard delivery).
///
/// A page or copy count of zero reads as missing and prices as 1.
#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfiguration {
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copies: Option<u32>,
    #[serde(default, rename = "colorType", skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,
    #[serde(default, rename = "bindingType", skip_serializing_if = "Option::is_none")]
    pub binding: Option<BindingMode>,
    #[serde(default, rename = "deliveryPackage", skip_serializing_if = "Option::is_none")]
    pub delivery: Option<DeliveryTier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_size: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_photo_width: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_photo_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_background: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub banner_length: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_dimension",
        skip_serializing_if = "Option::is_none"
    )]
    pub banner_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ServiceConfiguration {
    pub fn new(category: impl Into<Category>) -> Self {
        Self {
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn pages(&self) -> u32 {
        self.pages.filter(|&p| p > 0).unwrap_or(1)
    }

    pub fn copies(&self) -> u32 {
        self.copies.filter(|&c| c > 0).unwrap_or(1)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode.unwrap_or_default()
    }

    pub fn binding(&self) -> BindingMode {
        self.binding.unwrap_or_default()
    }

    pub fn delivery(&self) -> DeliveryTier {
        self.delivery.unwrap_or_default()
    }
}
