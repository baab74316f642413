//! Vehicle domain model.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::utils::serialize_decimal;

/// The condition of a used vehicle at the time it is valued.
///
/// Counts are unsigned, so a negative age, mileage, owner or collision count
/// cannot be expressed. The purchase value is a plain `Decimal` and is not
/// checked unless [`VehicleRecord::validate`] is called.
///
/// `purchaseValue` serializes as a decimal string. On input a string is
/// decoded exactly; a JSON number goes through `f64` first and keeps only
/// about 15 significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    /// Price paid for the vehicle; the baseline of every valuation
    #[serde(serialize_with = "serialize_decimal")]
    pub purchase_value: Decimal,
    pub age_in_months: u32,
    /// Odometer reading
    pub number_of_miles: u32,
    pub number_of_previous_owners: u32,
    /// Reported collisions
    pub number_of_collisions: u32,
}

impl VehicleRecord {
    pub fn new(
        purchase_value: Decimal,
        age_in_months: u32,
        number_of_miles: u32,
        number_of_previous_owners: u32,
        number_of_collisions: u32,
    ) -> Self {
        Self {
            purchase_value,
            age_in_months,
            number_of_miles,
            number_of_previous_owners,
            number_of_collisions,
        }
    }

    /// Strict input check. The calculator accepts any record; callers that
    /// want to refuse a negative purchase value opt in here.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.purchase_value < Decimal::ZERO {
            return Err(ValidationError::NegativePurchaseValue(
                self.purchase_value.to_string(),
            ));
        }
        Ok(())
    }
}

/// Decodes vehicle records from JSON.
///
/// Accepts one camelCase record object or an array of them. The shape is
/// picked from the first non-whitespace character, so decode errors name the
/// offending field and position.
pub fn parse_vehicle_records(json: &str) -> Result<Vec<VehicleRecord>> {
    let records = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<VehicleRecord>>(json)?
    } else {
        vec![serde_json::from_str::<VehicleRecord>(json)?]
    };
    debug!("Decoded {} vehicle record(s)", records.len());
    Ok(records)
}
