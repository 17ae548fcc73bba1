use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    models::{
        order::{CreateOrderRequest, OrderDraft, PaymentMethod},
        service_config::ServiceConfiguration,
        shop::Shop,
    },
    utils::{
        price::{PricingRules, compute_price_with},
        schedule::{ScheduleError, is_peak_slot, validate_pickup},
    },
};

#[derive(Debug, Error)]
pub enum OrderSubmitError {
    #[error("Failed to parse order data: {0}")]
    ParseData(String),

    #[error("Shop is not accepting orders: {0}")]
    ShopInactive(String),

    #[error("Shop {shop} does not offer category {category}")]
    CategoryNotOffered { shop: String, category: String },

    #[error("Pickup schedule rejected: {0}")]
    Schedule(#[from] ScheduleError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmitData {
    pub user_id: String,
    pub shop: Shop,
    pub service_detail: ServiceConfiguration,
    #[serde(default)]
    pub file_name: Option<String>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub payment_method: PaymentMethod,
}

/// Prices the job one last time and freezes the total into the body sent to
/// `POST /api/orders`.
pub fn handle_order_submit(
    rules: &PricingRules,
    now: NaiveDateTime,
    data: &str,
) -> Result<CreateOrderRequest, OrderSubmitError> {
    let submit: OrderSubmitData =
        serde_json::from_str(data).map_err(|e| OrderSubmitError::ParseData(e.to_string()))?;

    let shop = submit.shop;
    let detail = submit.service_detail;

    if !shop.is_active {
        return Err(OrderSubmitError::ShopInactive(shop.id));
    }

    if !shop.offers(&detail.category) {
        return Err(OrderSubmitError::CategoryNotOffered {
            shop: shop.id,
            category: detail.category.to_string(),
        });
    }

    validate_pickup(
        now,
        &submit.pickup_date,
        &submit.pickup_time,
        detail.delivery(),
        &shop.open_hours,
    )?;

    if is_peak_slot(&submit.pickup_time) {
        warn!("pickup at {} falls in a peak slot", submit.pickup_time);
    }

    let breakdown = compute_price_with(rules, shop.base_price, &detail);

    let request = CreateOrderRequest::from_draft(
        OrderDraft {
            user_id: submit.user_id,
            shop_id: shop.id,
            service_detail: detail,
            file_name: submit.file_name,
            pickup_date: submit.pickup_date,
            pickup_time: submit.pickup_time,
            payment_method: submit.payment_method,
        },
        &breakdown,
    );

    info!(
        "order for shop {} priced at {} via {}",
        request.shop_id, request.total_price, request.payment_method
    );

    Ok(request)
}
