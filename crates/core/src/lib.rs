//! Treasury Core - source tables, derived metrics and dashboard view models.
//!
//! This crate holds the FX treasury reporting logic. It is framework-agnostic:
//! the presentation shell (the `treasury-server` crate) only maps its plain
//! outputs onto HTTP responses.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod metrics;
pub mod tables;
pub mod utils;

// Re-export common types
pub use metrics::{MetricsService, MetricsServiceTrait};
pub use tables::{PartnerId, TreasuryDataset};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
