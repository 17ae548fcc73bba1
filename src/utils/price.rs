use serde::{Deserialize, Serialize};

use super::unit::{PhotoSize, area_cm2, area_m2};
use crate::models::{
    price_breakdown::PriceBreakdown,
    service_config::{BindingMode, Category, ColorMode, DeliveryTier, ServiceConfiguration},
};

/// Multiplier applied to the job cost for a delivery tier, together with the
/// rate reported as the visible surcharge or discount.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct DeliveryRule {
    pub multiplier: f64,
    pub adjustment: f64,
}

/// Tariff used by the calculator. Defaults are the marketplace prices.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PricingRules {
    pub admin_fee: u64,
    pub color_multiplier: u32,
    pub binding_simple_fee: u64,
    pub binding_hardcover_fee: u64,
    pub photo_2x3_price: u64,
    pub photo_3x4_price: u64,
    pub photo_4x6_price: u64,
    pub photo_custom_price_per_cm2: f64,
    pub banner_price_per_m2: f64,
    pub express: DeliveryRule,
    pub standard: DeliveryRule,
    pub economy: DeliveryRule,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            admin_fee: 1000,
            color_multiplier: 2,
            binding_simple_fee: 5000,
            binding_hardcover_fee: 20000,
            photo_2x3_price: 10000,
            photo_3x4_price: 15000,
            photo_4x6_price: 20000,
            photo_custom_price_per_cm2: 1250.0,
            banner_price_per_m2: 100000.0,
            express: DeliveryRule {
                multiplier: 1.5,
                adjustment: 0.5,
            },
            standard: DeliveryRule {
                multiplier: 1.0,
                adjustment: 0.0,
            },
            economy: DeliveryRule {
                multiplier: 0.8,
                adjustment: -0.2,
            },
        }
    }
}

impl PricingRules {
    pub fn binding_fee(&self, binding: BindingMode) -> u64 {
        match binding {
            BindingMode::None => 0,
            BindingMode::Simple => self.binding_simple_fee,
            BindingMode::Hardcover => self.binding_hardcover_fee,
        }
    }

    pub fn delivery_rule(&self, tier: DeliveryTier) -> DeliveryRule {
        match tier {
            DeliveryTier::Express => self.express,
            DeliveryTier::Standard => self.standard,
            DeliveryTier::Economy => self.economy,
        }
    }

    pub fn color_multiplier(&self, mode: ColorMode) -> u32 {
        match mode {
            ColorMode::Monochrome => 1,
            ColorMode::Color => self.color_multiplier,
        }
    }

    /// Unit price of one pas foto. Unknown sizes price at zero.
    pub fn photo_unit_price(&self, config: &ServiceConfiguration) -> u64 {
        let size = config
            .photo_size
            .as_deref()
            .and_then(|s| s.parse::<PhotoSize>().ok());

        match size {
            Some(PhotoSize::TwoByThree) => self.photo_2x3_price,
            Some(PhotoSize::ThreeByFour) => self.photo_3x4_price,
            Some(PhotoSize::FourBySix) => self.photo_4x6_price,
            Some(PhotoSize::Custom) => {
                let area = area_cm2(
                    config.custom_photo_width.unwrap_or(0.0),
                    config.custom_photo_height.unwrap_or(0.0),
                );
                round_amount(area * self.photo_custom_price_per_cm2)
            }
            None => 0,
        }
    }
}

/// Rounds to the nearest integer with halves going up, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounded money amount. Negative and NaN inputs read as zero, values past
/// `u64::MAX` saturate.
fn round_amount(value: f64) -> u64 {
    round_half_up(value) as u64
}

/// Prices a job with the default marketplace tariff.
pub fn compute_price(base_price: u64, config: &ServiceConfiguration) -> PriceBreakdown {
    compute_price_with(&PricingRules::default(), base_price, config)
}

/// Prices a job: category subtotal, then the delivery multiplier (rounded),
/// then binding fee and admin fee.
pub fn compute_price_with(
    rules: &PricingRules,
    base_price: u64,
    config: &ServiceConfiguration,
) -> PriceBreakdown {
    let pages = config.pages();
    let copies = config.copies();
    let color_multiplier = rules.color_multiplier(config.color_mode());

    let mut banner_area = 0.0;
    let mut photo_base_price = 0;

    let base_subtotal = match config.category {
        Category::Photo => {
            photo_base_price = rules.photo_unit_price(config);
            photo_base_price.saturating_mul(u64::from(copies))
        }
        Category::Banner => {
            banner_area = area_m2(
                config.banner_length.unwrap_or(0.0),
                config.banner_width.unwrap_or(0.0),
            );
            round_amount(banner_area * rules.banner_price_per_m2)
        }
        _ => base_price
            .saturating_mul(u64::from(pages))
            .saturating_mul(u64::from(copies))
            .saturating_mul(u64::from(color_multiplier)),
    };

    let binding_fee = rules.binding_fee(config.binding());
    let delivery = rules.delivery_rule(config.delivery());

    let subtotal = round_amount(base_subtotal as f64 * delivery.multiplier);
    let package_adjustment = round_half_up(base_subtotal as f64 * delivery.adjustment) as i64;
    let total = subtotal
        .saturating_add(binding_fee)
        .saturating_add(rules.admin_fee);

    PriceBreakdown {
        base_price,
        pages,
        copies,
        color_multiplier,
        base_subtotal,
        subtotal,
        binding_fee,
        package_multiplier: delivery.multiplier,
        package_adjustment,
        admin_fee: rules.admin_fee,
        total,
        banner_area: (banner_area > 0.0).then_some(banner_area),
        photo_base_price: (photo_base_price > 0).then_some(photo_base_price),
    }
}
