pub mod config;
pub mod intake;
pub mod inventory;
pub mod rotation;
pub mod stats;
pub mod triage;

pub use config::ConfigCommand;
pub use intake::IntakeCommand;
pub use inventory::InventoryCommand;
pub use rotation::RotationCommand;
pub use stats::StatsCommand;
pub use triage::TriageCommand;
