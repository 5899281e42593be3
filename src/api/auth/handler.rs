//! Authentication Handlers
//!
//! Session login, logout, and the auth-check used by the admin UI.

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::auth::{SESSION_IS_ADMIN, SESSION_PRINCIPAL_ID};
use crate::core::ServerState;
use crate::db::repository::principal;
use crate::utils::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub authenticated: bool,
}

/// POST /api/auth/login
///
/// Unknown username and wrong password produce the identical response,
/// so login failures never reveal whether the username exists.
pub async fn login(
    State(state): State<ServerState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let (Some(username), Some(password)) = (req.username, req.password) else {
        return Err(AppError::validation("Username and password are required"));
    };
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation("Username and password are required"));
    }

    let found = principal::find_by_username(state.pool(), &username).await?;

    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(principal) = found else {
        tracing::warn!(username = %username, "Login failed - user not found");
        return Err(AppError::invalid_credentials());
    };

    let password_valid = principal
        .verify_password(&password)
        .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
    if !password_valid {
        tracing::warn!(username = %username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    // Both keys are written before the response; a session is never
    // visible half-authenticated.
    session
        .insert(SESSION_PRINCIPAL_ID, principal.id.clone())
        .await?;
    session.insert(SESSION_IS_ADMIN, true).await?;

    tracing::info!(principal_id = %principal.id, "Admin logged in");

    Ok(Json(SuccessResponse { success: true }))
}

/// POST /api/auth/logout
///
/// Unconditional and idempotent — logging out an anonymous session is
/// not an error.
pub async fn logout(session: Session) -> AppResult<Json<SuccessResponse>> {
    session.flush().await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/auth/check
pub async fn check(session: Session) -> AppResult<Json<CheckResponse>> {
    let authenticated = session
        .get::<bool>(SESSION_IS_ADMIN)
        .await?
        .unwrap_or(false);
    Ok(Json(CheckResponse { authenticated }))
}
