use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use axum::{extract::State, routing::get, Json, Router};
use treasury_core::dashboard::Dashboard;

/// Full dashboard view model: cards, charts and their colors.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses((status = 200, description = "Dashboard view model"))
)]
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> ApiResult<Json<Dashboard>> {
    let dashboard = state.dashboard_service.get_dashboard()?;
    Ok(Json(dashboard))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard", get(get_dashboard))
}
