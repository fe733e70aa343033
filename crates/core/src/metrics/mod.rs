//! Metrics module - derived treasury metrics, calculators and service.

pub mod metrics_calculator;
mod metrics_errors;
mod metrics_model;
mod metrics_service;

pub use metrics_calculator::*;
pub use metrics_errors::MetricsError;
pub use metrics_model::*;
pub use metrics_service::{MetricsService, MetricsServiceTrait};
