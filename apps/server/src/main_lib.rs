use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use treasury_core::{
    dashboard::{DashboardService, DashboardServiceTrait},
    metrics::{MetricsService, MetricsServiceTrait},
    tables::dataset_2024,
};

use crate::config::Config;

pub struct AppState {
    pub metrics_service: Arc<dyn MetricsServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Loads the reporting year and wires the services. The dataset is validated
/// here, so a malformed table stops the server before it binds.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let dataset = dataset_2024().context("Failed to load treasury dataset")?;
    tracing::info!(
        "Loaded {} treasury dataset ({} partners), annual target {}",
        dataset.reporting_year,
        dataset.partners.partners().len(),
        config.annual_target
    );

    let metrics_service = Arc::new(MetricsService::new(
        Arc::new(dataset),
        config.annual_target,
    ));
    let dashboard_service = Arc::new(DashboardService::new(metrics_service.clone()));

    Ok(Arc::new(AppState {
        metrics_service,
        dashboard_service,
    }))
}
