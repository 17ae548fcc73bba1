pub mod order_preview;
pub mod order_submit;
pub mod order_verify;
