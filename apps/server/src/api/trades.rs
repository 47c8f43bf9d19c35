//! Journal CRUD, summary statistics, and CSV export.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get},
    Extension, Json, Router,
};
use tradediary_core::trades::{NewTrade, TradeSummary, TradeUpdate, TradeView};

use crate::{auth::AuthUser, error::ApiResult, main_lib::AppState};

async fn list_trades(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<Vec<TradeView>>> {
    let trades = state.trade_service.list_trades(&user_id)?;
    Ok(Json(trades.into_iter().map(TradeView::from).collect()))
}

async fn create_trade(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(input): Json<NewTrade>,
) -> ApiResult<(StatusCode, Json<TradeView>)> {
    let trade = state.trade_service.create_trade(&user_id, input)?;
    Ok((StatusCode::CREATED, Json(TradeView::from(trade))))
}

async fn update_trade(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
    Json(update): Json<TradeUpdate>,
) -> ApiResult<Json<TradeView>> {
    let trade = state.trade_service.update_trade(&user_id, &id, update)?;
    Ok(Json(TradeView::from(trade)))
}

async fn delete_trade(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<StatusCode> {
    state.trade_service.delete_trade(&user_id, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn trade_summary(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<TradeSummary>> {
    let summary = state.trade_service.summary(&user_id)?;
    Ok(Json(summary))
}

async fn export_trades(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Response> {
    let csv = state.trade_service.export_csv(&user_id)?;
    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"trades.csv\"",
        ),
    ];
    Ok((headers, csv).into_response())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/trades", get(list_trades).post(create_trade))
        .route("/trades/summary", get(trade_summary))
        .route("/trades/export", get(export_trades))
        .route("/trades/{id}", delete(delete_trade).put(update_trade))
}
