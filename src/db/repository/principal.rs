//! Principal Repository

use sqlx::SqlitePool;
use uuid::Uuid;

use super::RepoResult;
use crate::db::models::{Principal, normalize_username};

/// Case-insensitive lookup: the input is normalized and compared against
/// the lowercased stored username.
pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Principal>> {
    let normalized = normalize_username(username);
    let principal = sqlx::query_as::<_, Principal>(
        "SELECT id, username, password_hash FROM principals WHERE lower(username) = ?",
    )
    .bind(normalized)
    .fetch_optional(pool)
    .await?;
    Ok(principal)
}

/// Insert a principal. Used by the seed step only.
pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
) -> RepoResult<Principal> {
    let id = Uuid::new_v4().to_string();
    let username = normalize_username(username);

    sqlx::query("INSERT INTO principals (id, username, password_hash) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(&username)
        .bind(password_hash)
        .execute(pool)
        .await?;

    Ok(Principal {
        id,
        username,
        password_hash: password_hash.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::db::DbService;

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let db = DbService::in_memory().await.unwrap();

        super::create(&db.pool, "Admin@Example.com", "hash").await.unwrap();

        let found = super::find_by_username(&db.pool, "ADMIN@example.COM ")
            .await
            .unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().username, "admin@example.com");

        assert!(
            super::find_by_username(&db.pool, "other@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }
}
