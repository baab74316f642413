use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::valuation::valuation_constants::*;
use crate::valuation::{AdjustmentKind, OwnerAdjustment, ValuationAdjustment, VehicleValuation};
use crate::vehicles::VehicleRecord;

use log::{debug, trace};
use rust_decimal::Decimal;

/// Determines the current resale value of a used vehicle.
///
/// Adjustments compound on the running value in a fixed order:
/// age, mileage, owner penalty (more than two owners), collisions, and
/// finally the owner bonus (no previous owners). The result is rounded once,
/// at the end, to two decimal places with round-half-to-even.
///
/// The function is total: it never fails and never panics. Intermediate
/// values saturate at the `Decimal` bounds.
pub fn determine_value(record: &VehicleRecord) -> Decimal {
    let unrounded = apply_adjustments(record, |_| {});
    round_value(record, unrounded)
}

/// Same valuation as [`determine_value`], keeping every applied step.
pub fn value_vehicle(record: &VehicleRecord) -> VehicleValuation {
    let mut adjustments = Vec::new();
    let unrounded_value = apply_adjustments(record, |adjustment| adjustments.push(adjustment));

    VehicleValuation {
        record: *record,
        adjustments,
        unrounded_value,
        value: round_value(record, unrounded_value),
    }
}

/// Classifies how the previous-owner count affects the value.
pub fn owner_adjustment(number_of_previous_owners: u32) -> OwnerAdjustment {
    match number_of_previous_owners {
        0 => OwnerAdjustment::Bonus,
        n if n > OWNER_PENALTY_THRESHOLD => OwnerAdjustment::Penalty,
        _ => OwnerAdjustment::Neutral,
    }
}

/// Runs the pipeline and reports each step to `on_adjustment`.
/// Returns the unrounded running value.
fn apply_adjustments<F>(record: &VehicleRecord, mut on_adjustment: F) -> Decimal
where
    F: FnMut(ValuationAdjustment),
{
    let owners = owner_adjustment(record.number_of_previous_owners);
    let mut value = record.purchase_value;

    value = apply(
        value,
        AdjustmentKind::Age,
        age_factor(record.age_in_months),
        &mut on_adjustment,
    );
    value = apply(
        value,
        AdjustmentKind::Mileage,
        mileage_factor(record.number_of_miles),
        &mut on_adjustment,
    );

    if owners == OwnerAdjustment::Penalty {
        value = apply(
            value,
            AdjustmentKind::OwnerPenalty,
            Decimal::ONE - OWNER_PENALTY_RATE,
            &mut on_adjustment,
        );
    }

    // Each collision compounds on the value left by the previous one.
    let collision_factor = Decimal::ONE - COLLISION_DEPRECIATION_RATE;
    for _ in 0..record.number_of_collisions.min(MAX_DEPRECIATING_COLLISIONS) {
        value = apply(
            value,
            AdjustmentKind::Collision,
            collision_factor,
            &mut on_adjustment,
        );
    }

    if owners == OwnerAdjustment::Bonus {
        value = apply(
            value,
            AdjustmentKind::OwnerBonus,
            Decimal::ONE + OWNER_BONUS_RATE,
            &mut on_adjustment,
        );
    }

    value
}

fn apply<F>(value: Decimal, kind: AdjustmentKind, factor: Decimal, on_adjustment: &mut F) -> Decimal
where
    F: FnMut(ValuationAdjustment),
{
    let value_after = value.saturating_mul(factor);
    trace!(
        "Applied {} adjustment x{}: {} -> {}",
        kind.as_str(),
        factor,
        value,
        value_after
    );
    on_adjustment(ValuationAdjustment {
        kind,
        factor,
        value_before: value,
        value_after,
    });
    value_after
}

/// Multiplier for the age step. Frozen at the 120-month level beyond the cap.
fn age_factor(age_in_months: u32) -> Decimal {
    let effective_months = age_in_months.min(MAX_DEPRECIATING_AGE_MONTHS);
    Decimal::ONE - AGE_DEPRECIATION_PER_MONTH * Decimal::from(effective_months)
}

/// Multiplier for the mileage step. Partial thousands count proportionally.
fn mileage_factor(number_of_miles: u32) -> Decimal {
    let effective_miles = number_of_miles.min(MAX_DEPRECIATING_MILES);
    Decimal::ONE - MILEAGE_DEPRECIATION_PER_UNIT * (Decimal::from(effective_miles) / MILES_PER_UNIT)
}

fn round_value(record: &VehicleRecord, unrounded: Decimal) -> Decimal {
    let value = unrounded.round_dp(DISPLAY_DECIMAL_PRECISION);
    debug!(
        "Valued vehicle (purchase {}, {} months, {} miles, {} owners, {} collisions) at {}",
        record.purchase_value,
        record.age_in_months,
        record.number_of_miles,
        record.number_of_previous_owners,
        record.number_of_collisions,
        value
    );
    value
}
