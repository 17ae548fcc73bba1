use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    models::{
        price_breakdown::PriceBreakdown,
        service_config::{BindingMode, ServiceConfiguration},
    },
    utils::price::{PricingRules, compute_price_with},
};

#[derive(Debug, Error)]
pub enum OrderPreviewError {
    #[error("Failed to parse service detail: {0}")]
    ParseDetail(String),
}

/// Live price shown while the customer fills in the service detail form.
pub fn handle_order_preview(
    rules: &PricingRules,
    base_price: u64,
    data: &str,
) -> Result<PriceBreakdown, OrderPreviewError> {
    let detail: ServiceConfiguration =
        serde_json::from_str(data).map_err(|e| OrderPreviewError::ParseDetail(e.to_string()))?;

    debug!("handle_order_preview detail: {:?}", detail);

    if detail.binding() != BindingMode::None && !detail.category.offers_binding() {
        warn!("binding requested for {}, charged anyway", detail.category);
    }

    let breakdown = compute_price_with(rules, base_price, &detail);

    info!(
        "order preview for {}: subtotal {} + fees {} = {}",
        detail.category,
        breakdown.subtotal,
        breakdown.fees(),
        breakdown.total
    );

    Ok(breakdown)
}
