//! Command implementations

pub mod simulate;

pub use simulate::{SimulationReport, run_simulation};
