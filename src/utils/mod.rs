pub mod pages;
pub mod price;
pub mod schedule;
pub mod unit;
