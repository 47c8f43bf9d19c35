//! Registration, login, and the current-user endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::{Deserialize, Serialize};
use tradediary_core::users::{NewUser, User};

use crate::{
    auth::AuthUser,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody {
    name: String,
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    token: String,
    expires_in_secs: u64,
    user: User,
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterBody>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    if body.password.len() < 6 {
        return Err(ApiError::BadRequest(
            "Password must be at least 6 characters".into(),
        ));
    }

    let password_hash = state
        .auth
        .hash_password(&body.password)
        .map_err(|_| ApiError::Internal("Failed to hash password".into()))?;

    let user = state.user_service.register(NewUser {
        name: body.name,
        email: body.email,
        password_hash,
    })?;

    let token = state
        .auth
        .issue_token(&user.id)
        .map_err(|_| ApiError::Internal("Failed to issue token".into()))?;

    let session = SessionResponse {
        token,
        expires_in_secs: state.auth.expires_in().as_secs(),
        user,
    };
    Ok((StatusCode::CREATED, Json(session)))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> ApiResult<Json<SessionResponse>> {
    // A missing account and a bad password answer identically, so the
    // endpoint cannot be used to probe registered emails.
    let user = state
        .user_service
        .get_by_email(&body.email)?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".into()))?;

    state
        .auth
        .verify_password(&body.password, &user.password_hash)
        .map_err(|_| ApiError::Unauthorized("Invalid email or password".into()))?;

    let token = state
        .auth
        .issue_token(&user.id)
        .map_err(|_| ApiError::Internal("Failed to issue token".into()))?;

    Ok(Json(SessionResponse {
        token,
        expires_in_secs: state.auth.expires_in().as_secs(),
        user,
    }))
}

async fn me(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(user_id)): Extension<AuthUser>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_by_id(&user_id)?;
    Ok(Json(user))
}

pub fn public_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new().route("/auth/me", get(me))
}
