//! Vehicles module - the valuation input record and its intake.

mod vehicles_model;

#[cfg(test)]
mod vehicles_model_tests;

pub use vehicles_model::{parse_vehicle_records, VehicleRecord};
