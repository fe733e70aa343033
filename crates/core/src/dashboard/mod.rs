//! Dashboard module - chart-ready view models built from the metrics.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::*;
pub use dashboard_service::{income_color, DashboardService, DashboardServiceTrait};
