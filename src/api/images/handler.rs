//! Image Handler
//!
//! Serves stored asset bytes with the Content-Type captured at upload.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::db::repository::asset;
use crate::utils::{AppError, AppResult};

/// GET /api/images/{id}
pub async fn serve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| AppError::validation("Invalid image id"))?;

    let asset = asset::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Image not found"))?;

    Ok(([(header::CONTENT_TYPE, asset.mime_type)], asset.data).into_response())
}
