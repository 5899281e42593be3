//! Admin Session Extractor
//!
//! Use this extractor in mutating handlers to require an authenticated
//! admin session. Missing or expired sessions reject with 401 before
//! the handler body runs.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::auth::{SESSION_IS_ADMIN, SESSION_PRINCIPAL_ID};
use crate::utils::AppError;

/// Authenticated admin context, threaded explicitly through handlers
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub principal_id: String,
    pub session: Session,
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal(format!("Session layer missing: {msg}")))?;

        let is_admin = session
            .get::<bool>(SESSION_IS_ADMIN)
            .await?
            .unwrap_or(false);
        if !is_admin {
            tracing::warn!(uri = %parts.uri, "Rejected unauthenticated request to gated route");
            return Err(AppError::Unauthorized);
        }

        let principal_id = session
            .get::<String>(SESSION_PRINCIPAL_ID)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(AdminSession {
            principal_id,
            session,
        })
    }
}
