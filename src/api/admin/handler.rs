//! Admin Handlers

use axum::{Json, extract::State};

use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::ProductStats;
use crate::db::repository::product;
use crate::utils::AppResult;

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<ServerState>,
    _admin: AdminSession,
) -> AppResult<Json<ProductStats>> {
    let stats = product::stats(state.pool()).await?;
    Ok(Json(stats))
}
