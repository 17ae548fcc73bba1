use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Itemized price of one print job, in rupiah.
///
/// `subtotal` is the job cost after the delivery multiplier, rounded once.
/// `package_adjustment` is rounded on its own from `base_subtotal`, so
/// `base_subtotal + package_adjustment` may differ from `subtotal` by one.
#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    #[typeshare(serialized_as = "number")]
    pub base_price: u64,
    pub pages: u32,
    pub copies: u32,
    pub color_multiplier: u32,
    #[typeshare(serialized_as = "number")]
    pub base_subtotal: u64,
    #[typeshare(serialized_as = "number")]
    pub subtotal: u64,
    #[typeshare(serialized_as = "number")]
    pub binding_fee: u64,
    pub package_multiplier: f64,
    #[typeshare(serialized_as = "number")]
    pub package_adjustment: i64,
    #[typeshare(serialized_as = "number")]
    pub admin_fee: u64,
    #[typeshare(serialized_as = "number")]
    pub total: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[typeshare(serialized_as = "number")]
    pub photo_base_price: Option<u64>,
}

impl PriceBreakdown {
    /// Amount added on top of the job cost: binding plus admin fee.
    pub fn fees(&self) -> u64 {
        self.binding_fee.saturating_add(self.admin_fee)
    }
}
