pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{init_tracing, run};
