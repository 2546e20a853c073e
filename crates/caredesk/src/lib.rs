//! Caredesk - bounded record stores for a hospital front desk
//!
//! Four containers back the desk roles: a FIFO intake queue, a LIFO supply
//! stack with keyed removal, a triage max-heap and a rotating ambulance
//! queue. Each one persists to its own line-oriented text file.

pub mod config;
pub mod desk;
pub mod error;
pub mod persist;
pub mod record;
pub mod render;
pub mod store;
pub mod testing;

pub use config::Config;
pub use desk::{Applied, Desk, OpenReport, Role};
pub use error::{CaredeskError, Result, StoreError};
pub use render::Render;
