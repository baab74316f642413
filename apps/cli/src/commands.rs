//! Command implementations. Every command writes its report to a caller
//! supplied writer.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use carpricer_core::{
    determine_value, format_money, parse_vehicle_records, serialize_money, value_vehicle,
    VehicleRecord, VehicleValuation,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::Config;
use crate::error::{CliError, CliResult};

/// A fixed record with its known value, used by `demo`.
pub struct ReferenceScenario {
    pub record: VehicleRecord,
    pub expected: Decimal,
}

/// Reference vehicles: three-year-old cars bought for 35,000.
pub fn reference_scenarios() -> Vec<ReferenceScenario> {
    let scenario = |miles: u32, owners: u32, collisions: u32, cents: i64| ReferenceScenario {
        record: VehicleRecord::new(Decimal::new(35000, 0), 3 * 12, miles, owners, collisions),
        expected: Decimal::new(cents, 2),
    };
    vec![
        scenario(50000, 1, 1, 2_531_340),
        scenario(150000, 1, 1, 1_968_820),
        scenario(250000, 1, 1, 1_968_820),
        scenario(250000, 1, 0, 2_009_000),
        scenario(250000, 0, 1, 2_165_702),
    ]
}

/// Applies strict validation when configured.
pub fn check_record(index: usize, record: &VehicleRecord, config: &Config) -> CliResult<()> {
    if !config.strict_input {
        return Ok(());
    }
    record
        .validate()
        .map_err(|e| CliError::RejectedRecord {
            index,
            source: e.into(),
        })
}

pub fn value<W: Write>(
    record: &VehicleRecord,
    explain: bool,
    json: bool,
    config: &Config,
    out: &mut W,
) -> anyhow::Result<()> {
    check_record(0, record, config)?;

    let valuation = value_vehicle(record);
    // The JSON form always carries the adjustments, with or without `explain`.
    if json {
        serde_json::to_writer_pretty(&mut *out, &valuation)?;
        writeln!(out)?;
        return Ok(());
    }

    if explain {
        write_explanation(&valuation, out)?;
    } else {
        writeln!(out, "{}", format_money(valuation.value))?;
    }
    Ok(())
}

fn write_explanation<W: Write>(valuation: &VehicleValuation, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{:<14} {}", "purchase", valuation.record.purchase_value)?;
    for adjustment in &valuation.adjustments {
        writeln!(
            out,
            "{:<14} x{:<8} {} -> {}",
            adjustment.kind.as_str(),
            adjustment.factor.normalize(),
            adjustment.value_before.normalize(),
            adjustment.value_after.normalize()
        )?;
    }
    writeln!(out, "{:<14} {}", "value", format_money(valuation.value))?;
    Ok(())
}

/// Values every record in `json` and writes the itemised results as a JSON array.
pub fn batch<W: Write>(json: &str, config: &Config, out: &mut W) -> anyhow::Result<()> {
    let records = parse_vehicle_records(json).map_err(CliError::from)?;
    for (index, record) in records.iter().enumerate() {
        check_record(index, record, config)?;
    }

    let valuations: Vec<VehicleValuation> = records.iter().map(value_vehicle).collect();
    tracing::info!("Valued {} vehicle(s)", valuations.len());

    serde_json::to_writer_pretty(&mut *out, &valuations)?;
    writeln!(out)?;
    Ok(())
}

/// Reads the batch input from a file, or from stdin when the path is "-".
pub fn read_input(input: &Path) -> anyhow::Result<String> {
    let mut json = String::new();
    if input == Path::new("-") {
        std::io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read vehicle records from stdin")?;
    } else {
        json = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read vehicle records from {}", input.display()))?;
    }
    Ok(json)
}

/// Outcome of one reference scenario, as reported by `demo --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario: usize,
    pub record: VehicleRecord,
    #[serde(serialize_with = "serialize_money")]
    pub expected: Decimal,
    #[serde(serialize_with = "serialize_money")]
    pub actual: Decimal,
    pub passed: bool,
}

/// Evaluates every reference scenario against the calculator.
pub fn run_scenarios() -> Vec<ScenarioResult> {
    reference_scenarios()
        .into_iter()
        .enumerate()
        .map(|(index, scenario)| {
            let actual = determine_value(&scenario.record);
            ScenarioResult {
                scenario: index + 1,
                record: scenario.record,
                expected: scenario.expected,
                actual,
                passed: actual == scenario.expected,
            }
        })
        .collect()
}

/// Runs the reference scenarios. Returns whether every value matched.
pub fn demo<W: Write>(json: bool, out: &mut W) -> anyhow::Result<bool> {
    let results = run_scenarios();
    let all_passed = results.iter().all(|result| result.passed);
    for result in results.iter().filter(|result| !result.passed) {
        tracing::warn!(
            "Scenario {} expected {} but got {}",
            result.scenario,
            result.expected,
            result.actual
        );
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
        return Ok(all_passed);
    }

    for result in &results {
        let record = &result.record;
        writeln!(
            out,
            "scenario {}: ({}, {}, {}, {}, {}) expected {} got {} {}",
            result.scenario,
            record.purchase_value,
            record.age_in_months,
            record.number_of_miles,
            record.number_of_previous_owners,
            record.number_of_collisions,
            format_money(result.expected),
            format_money(result.actual),
            if result.passed { "ok" } else { "FAILED" }
        )?;
    }
    Ok(all_passed)
}
