//! Quote chart endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tradediary_market_data::PricePoint;

use crate::main_lib::AppState;

/// Always answers 200 with a chartable series; upstream failures are
/// resolved inside the quote service.
async fn chart_data(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<PricePoint>> {
    Json(state.quote_service.chart_data(&symbol).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stocks/chart/{symbol}", get(chart_data))
}
