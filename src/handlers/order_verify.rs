use thiserror::Error;
use tracing::{info, warn};

use crate::{
    models::{order::CreateOrderRequest, price_breakdown::PriceBreakdown},
    utils::price::{PricingRules, compute_price_with},
};

#[derive(Debug, Error)]
pub enum OrderVerifyError {
    #[error("Failed to parse order request: {0}")]
    ParseRequest(String),

    #[error("Total price mismatch: expected {expected}, got {submitted}")]
    TotalMismatch { expected: u64, submitted: u64 },
}

/// Recomputes the total of a submitted order body. The order endpoint stores
/// `totalPrice` as sent; this check is only run when asked for.
pub fn handle_order_verify(
    rules: &PricingRules,
    base_price: u64,
    data: &str,
) -> Result<PriceBreakdown, OrderVerifyError> {
    let request: CreateOrderRequest =
        serde_json::from_str(data).map_err(|e| OrderVerifyError::ParseRequest(e.to_string()))?;

    let breakdown = compute_price_with(rules, base_price, &request.service_detail);

    if breakdown.total != request.total_price {
        warn!(
            "order for shop {} claims {} but prices at {}",
            request.shop_id, request.total_price, breakdown.total
        );
        return Err(OrderVerifyError::TotalMismatch {
            expected: breakdown.total,
            submitted: request.total_price,
        });
    }

    info!("order for shop {} verified at {}", request.shop_id, breakdown.total);

    Ok(breakdown)
}
