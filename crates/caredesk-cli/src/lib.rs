pub mod commands;
pub mod error;
pub mod output;

pub use commands::{
    ConfigCommand, IntakeCommand, InventoryCommand, RotationCommand, StatsCommand, TriageCommand,
};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, print_json, settle};
