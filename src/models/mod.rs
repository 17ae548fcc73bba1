pub mod order;
pub mod price_breakdown;
pub mod service_config;
pub mod shop;
