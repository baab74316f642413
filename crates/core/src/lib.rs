//! CarPricer Core - vehicle records and the resale valuation rules.
//!
//! The valuation itself is a pure function over a `VehicleRecord`. Everything
//! else in this crate (JSON intake, validation, itemised breakdowns) is
//! layered on top of it and never changes the computed value.

pub mod constants;
pub mod errors;
pub mod utils;
pub mod valuation;
pub mod vehicles;

pub use valuation::*;
pub use vehicles::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
