//! # Domain Models
//!
//! This crate contains pure domain types with a single dependency (`serde`).
//! Keep it lean: no I/O or calculation logic, just data, defaults and simple helpers.

pub mod pricing;
pub mod scenario;

pub use pricing::DiscountPolicy;
pub use scenario::Scenario;
