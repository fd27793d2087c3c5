pub mod error;
pub mod config;
pub mod scheduler;
pub mod table;
pub mod runner;
pub mod simulate;

#[cfg(test)]
mod test_support;

pub use config::TableConfig;
pub use error::{ConfigError, TableError};
pub use runner::{run_round, RoundResult};
pub use simulate::{simulate, SimulationSummary};
pub use table::{StepOutcome, Table};
