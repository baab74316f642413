use std::path::PathBuf;

use carpricer_core::VehicleRecord;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// carpricer - values used vehicles from their age, mileage and history
#[derive(Parser, Debug)]
#[command(name = "carpricer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Value a single vehicle
    Value {
        #[command(flatten)]
        vehicle: VehicleArgs,

        /// Show every adjustment applied to the value (always included with --json)
        #[arg(long)]
        explain: bool,
    },

    /// Value every record in a JSON file (a single object or an array)
    Batch {
        /// Input file, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },

    /// Run the reference scenarios and check their values
    Demo,
}

#[derive(Args, Debug, Clone)]
pub struct VehicleArgs {
    /// Price paid for the vehicle
    #[arg(long, allow_hyphen_values = true)]
    pub purchase_value: Decimal,

    /// Age of the vehicle in months
    #[arg(long)]
    pub age_months: u32,

    /// Odometer reading
    #[arg(long)]
    pub miles: u32,

    /// Number of previous owners
    #[arg(long)]
    pub owners: u32,

    /// Number of reported collisions
    #[arg(long)]
    pub collisions: u32,
}

impl From<&VehicleArgs> for VehicleRecord {
    fn from(args: &VehicleArgs) -> Self {
        VehicleRecord::new(
            args.purchase_value,
            args.age_months,
            args.miles,
            args.owners,
            args.collisions,
        )
    }
}
