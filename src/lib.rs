//! Pricing and order plumbing for the BeresinAja print shop marketplace.
//!
//! The heart of the crate is [`compute_price`]: a pure function from a shop's
//! per-page base price and a [`ServiceConfiguration`] to an itemized
//! [`PriceBreakdown`]. The live preview and the final order submission both
//! go through it, and the resulting total is frozen into the order body.

pub mod config;
pub mod handlers;
pub mod models;
pub mod utils;

pub use models::{price_breakdown::PriceBreakdown, service_config::ServiceConfiguration};
pub use utils::price::{PricingRules, compute_price, compute_price_with};
