use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use typeshare::typeshare;
use uuid::Uuid;

use super::{price_breakdown::PriceBreakdown, service_config::ServiceConfiguration};

#[derive(Debug, Error, PartialEq)]
pub enum OrderError {
    #[error("Order cannot move from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Rejecting an order requires a reason")]
    MissingRejectionReason,

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("Only completed orders can be rated, order is {0}")]
    NotCompleted(OrderStatus),
}

#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Qris,
    Bank,
    Cod,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method_str = match self {
            PaymentMethod::Qris => "qris",
            PaymentMethod::Bank => "bank",
            PaymentMethod::Cod => "cod",
        };
        write!(f, "{method_str}")
    }
}

#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Ready,
    Completed,
    Rejected,
}

impl OrderStatus {
    /// Shop dashboard workflow: accept or reject a pending order, then mark it
    /// ready and finally completed on pickup.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Processing)
                | (OrderStatus::Pending, OrderStatus::Rejected)
                | (OrderStatus::Processing, OrderStatus::Ready)
                | (OrderStatus::Ready, OrderStatus::Completed)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status_str = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Rejected => "rejected",
        };
        write!(f, "{status_str}")
    }
}

/// Body of `POST /api/orders`. The endpoint stores `total_price` as sent.
#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub shop_id: String,
    pub category: String,
    pub service_detail: ServiceConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub payment_method: PaymentMethod,
    #[typeshare(serialized_as = "number")]
    pub total_price: u64,
}

#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub user_id: String,
    pub shop_id: String,
    pub service_detail: ServiceConfiguration,
    pub file_name: Option<String>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub payment_method: PaymentMethod,
}

impl CreateOrderRequest {
    /// Freezes the breakdown total into the request.
    pub fn from_draft(draft: OrderDraft, breakdown: &PriceBreakdown) -> Self {
        Self {
            user_id: draft.user_id,
            shop_id: draft.shop_id,
            category: draft.service_detail.category.id().to_string(),
            service_detail: draft.service_detail,
            file_name: draft.file_name,
            pickup_date: draft.pickup_date,
            pickup_time: draft.pickup_time,
            payment_method: draft.payment_method,
            total_price: breakdown.total,
        }
    }
}

#[typeshare]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub shop_id: String,
    pub category: String,
    pub service_detail: ServiceConfiguration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub pickup_date: String,
    pub pickup_time: String,
    pub payment_method: PaymentMethod,
    #[typeshare(serialized_as = "number")]
    pub total_price: u64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl Order {
    pub fn from_request(request: CreateOrderRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: request.user_id,
            shop_id: request.shop_id,
            category: request.category,
            service_detail: request.service_detail,
            file_name: request.file_name,
            pickup_date: request.pickup_date,
            pickup_time: request.pickup_time,
            payment_method: request.payment_method,
            total_price: request.total_price,
            status: OrderStatus::Pending,
            rejection_reason: None,
            rating: None,
            review: None,
        }
    }

    pub fn update_status(
        &mut self,
        next: OrderStatus,
        rejection_reason: Option<String>,
    ) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }

        if next == OrderStatus::Rejected {
            let reason = rejection_reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .ok_or(OrderError::MissingRejectionReason)?;
            self.rejection_reason = Some(reason);
        }

        self.status = next;
        Ok(())
    }

    pub fn rate(&mut self, rating: u8, review: Option<String>) -> Result<(), OrderError> {
        if self.status != OrderStatus::Completed {
            return Err(OrderError::NotCompleted(self.status));
        }
        if !(1..=5).contains(&rating) {
            return Err(OrderError::InvalidRating(rating));
        }

        self.rating = Some(rating);
        self.review = review.filter(|r| !r.trim().is_empty());
        Ok(())
    }
}
