/// Decimal precision for the final monetary value
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
