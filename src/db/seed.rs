//! Startup provisioning
//!
//! The single administrative principal is created here, never through a
//! public endpoint.

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::models::{Principal, normalize_username};
use crate::db::repository::principal;
use crate::utils::AppError;

/// Create the admin principal named by `ADMIN_USERNAME` if it does not
/// exist yet. A no-op when credentials are unset or the principal is
/// already provisioned.
pub async fn ensure_admin(pool: &SqlitePool, config: &Config) -> Result<(), AppError> {
    let (Some(username), Some(password)) = (&config.admin_username, &config.admin_password)
    else {
        tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set; admin login unavailable");
        return Ok(());
    };

    if principal::find_by_username(pool, username).await?.is_some() {
        return Ok(());
    }

    let hash = Principal::hash_password(password)
        .map_err(|e| AppError::internal(format!("Failed to hash admin password: {e}")))?;
    principal::create(pool, username, &hash).await?;

    tracing::info!(username = %normalize_username(username), "Admin principal created");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn test_config() -> Config {
        Config {
            http_port: 0,
            database_path: ":memory:".into(),
            environment: "development".into(),
            cors_origin: "http://localhost:5173".into(),
            admin_username: Some("Admin@Example.com".into()),
            admin_password: Some("admin123".into()),
        }
    }

    #[tokio::test]
    async fn seeds_admin_once() {
        let db = DbService::in_memory().await.unwrap();
        let config = test_config();

        ensure_admin(&db.pool, &config).await.unwrap();
        // Idempotent on re-run
        ensure_admin(&db.pool, &config).await.unwrap();

        let admin = principal::find_by_username(&db.pool, "admin@example.com")
            .await
            .unwrap()
            .expect("admin seeded");
        assert!(admin.verify_password("admin123").unwrap());
    }

    #[tokio::test]
    async fn skips_when_unconfigured() {
        let db = DbService::in_memory().await.unwrap();
        let mut config = test_config();
        config.admin_username = None;

        ensure_admin(&db.pool, &config).await.unwrap();
        assert!(
            principal::find_by_username(&db.pool, "admin@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
