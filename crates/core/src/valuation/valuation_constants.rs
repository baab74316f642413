//! Rates and saturation caps of the valuation rules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Share of the running value lost per month of age
pub const AGE_DEPRECIATION_PER_MONTH: Decimal = dec!(0.005);
/// Age (in months) after which the vehicle no longer depreciates with age
pub const MAX_DEPRECIATING_AGE_MONTHS: u32 = 120;

/// Share of the running value lost per 1,000 miles
pub const MILEAGE_DEPRECIATION_PER_UNIT: Decimal = dec!(0.002);
/// Miles in one mileage depreciation unit
pub const MILES_PER_UNIT: Decimal = dec!(1000);
/// Odometer reading after which mileage no longer depreciates the vehicle
pub const MAX_DEPRECIATING_MILES: u32 = 150_000;

/// More previous owners than this triggers the owner penalty
pub const OWNER_PENALTY_THRESHOLD: u32 = 2;
pub const OWNER_PENALTY_RATE: Decimal = dec!(0.25);
/// Applied to the final value when the vehicle never had an owner
pub const OWNER_BONUS_RATE: Decimal = dec!(0.10);

/// Share of the running value lost per reported collision
pub const COLLISION_DEPRECIATION_RATE: Decimal = dec!(0.02);
pub const MAX_DEPRECIATING_COLLISIONS: u32 = 5;
