//! Vehicle valuation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::utils::serialize_decimal;
use crate::vehicles::VehicleRecord;

/// Kind of a single step in the valuation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentKind {
    Age,
    Mileage,
    OwnerPenalty,
    Collision,
    OwnerBonus,
}

impl AdjustmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjustmentKind::Age => "age",
            AdjustmentKind::Mileage => "mileage",
            AdjustmentKind::OwnerPenalty => "owner penalty",
            AdjustmentKind::Collision => "collision",
            AdjustmentKind::OwnerBonus => "owner bonus",
        }
    }
}

/// How the previous-owner count affects the value.
///
/// The penalty is applied before collisions, the bonus after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerAdjustment {
    /// More than two previous owners
    Penalty,
    /// One or two previous owners
    Neutral,
    /// No previous owners
    Bonus,
}

/// One multiplicative step applied to the running value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationAdjustment {
    pub kind: AdjustmentKind,
    #[serde(serialize_with = "serialize_decimal")]
    pub factor: Decimal,
    #[serde(serialize_with = "serialize_decimal")]
    pub value_before: Decimal,
    #[serde(serialize_with = "serialize_decimal")]
    pub value_after: Decimal,
}

/// Itemised result of valuing a vehicle.
///
/// Every amount serializes as a decimal string, so a serialized valuation
/// decodes back to an equal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleValuation {
    pub record: VehicleRecord,
    /// Steps in the order they were applied
    pub adjustments: Vec<ValuationAdjustment>,
    /// Running value before the final rounding
    #[serde(serialize_with = "serialize_decimal")]
    pub unrounded_value: Decimal,
    #[serde(serialize_with = "serialize_money")]
    pub value: Decimal,
}

/// Serializes a monetary amount as a string with exactly two fractional digits.
pub fn serialize_money<S>(decimal: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_money(*decimal))
}

/// Formats a monetary amount with exactly two fractional digits.
pub fn format_money(decimal: Decimal) -> String {
    format!(
        "{:.*}",
        DISPLAY_DECIMAL_PRECISION as usize,
        decimal.round_dp(DISPLAY_DECIMAL_PRECISION)
    )
}
