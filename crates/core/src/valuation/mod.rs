pub mod valuation_calculator;
pub mod valuation_constants;
pub mod valuation_model;


pub use valuation_calculator::*;
pub use valuation_constants::*;
pub use valuation_model::*;
