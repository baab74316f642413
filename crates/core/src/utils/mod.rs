pub mod decimal_utils;

pub use decimal_utils::serialize_decimal;
