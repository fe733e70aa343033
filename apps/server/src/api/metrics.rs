use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{MarketShareResponse, PartnerOverview},
};
use axum::{extract::State, routing::get, Json, Router};
use treasury_core::metrics::{HeadlineMetrics, MonthlyPerformance, VolumeIncomePoint};

#[utoipa::path(
    get,
    path = "/api/v1/metrics/headline",
    responses((status = 200, description = "Cumulative volume, income and target progress"))
)]
pub async fn get_headline(State(state): State<Arc<AppState>>) -> ApiResult<Json<HeadlineMetrics>> {
    let headline = state.metrics_service.get_headline_metrics()?;
    Ok(Json(headline))
}

#[utoipa::path(
    get,
    path = "/api/v1/metrics/market-share",
    responses((status = 200, description = "Market share per partner"))
)]
pub async fn get_market_share(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MarketShareResponse>> {
    let shares = state.metrics_service.get_market_shares()?;
    let dominant_partner = state.metrics_service.get_dominant_partner()?;
    Ok(Json(MarketShareResponse {
        shares,
        dominant_partner,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/metrics/monthly",
    responses((status = 200, description = "Monthly volume and income"))
)]
pub async fn get_monthly(State(state): State<Arc<AppState>>) -> Json<MonthlyPerformance> {
    Json(state.metrics_service.get_monthly_performance())
}

#[utoipa::path(
    get,
    path = "/api/v1/metrics/partners",
    responses((status = 200, description = "Partner totals and monthly series"))
)]
pub async fn get_partners(State(state): State<Arc<AppState>>) -> Json<PartnerOverview> {
    Json(PartnerOverview {
        totals: state.metrics_service.get_partner_totals(),
        series: state.metrics_service.get_partner_volume_series(),
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/metrics/volume-income",
    responses((status = 200, description = "Volume vs income per month"))
)]
pub async fn get_volume_income(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<VolumeIncomePoint>> {
    Json(state.metrics_service.get_volume_income_series())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics/headline", get(get_headline))
        .route("/metrics/market-share", get(get_market_share))
        .route("/metrics/monthly", get(get_monthly))
        .route("/metrics/partners", get(get_partners))
        .route("/metrics/volume-income", get(get_volume_income))
}
