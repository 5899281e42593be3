//! Asset Repository
//!
//! Assets are write-once: there is no update or delete. Deleting a
//! product never touches its asset, so orphaned rows may persist.

use sqlx::SqlitePool;

use super::RepoResult;
use crate::db::models::Asset;

/// Store image bytes, returning the new asset id
pub async fn create(
    pool: &SqlitePool,
    filename: &str,
    data: &[u8],
    mime_type: &str,
) -> RepoResult<i64> {
    let result = sqlx::query("INSERT INTO assets (filename, data, mime_type) VALUES (?, ?, ?)")
        .bind(filename)
        .bind(data)
        .bind(mime_type)
        .execute(pool)
        .await?;
    Ok(result.last_insert_rowid())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Asset>> {
    let asset = sqlx::query_as::<_, Asset>(
        "SELECT id, filename, data, mime_type FROM assets WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(asset)
}

#[cfg(test)]
mod tests {
    use crate::db::DbService;

    #[tokio::test]
    async fn stores_and_serves_bytes() {
        let db = DbService::in_memory().await.unwrap();

        let id = super::create(&db.pool, "veil.png", &[1, 2, 3, 4, 5], "image/png")
            .await
            .unwrap();
        assert!(id > 0);

        let asset = super::find_by_id(&db.pool, id).await.unwrap().unwrap();
        assert_eq!(asset.data, vec![1, 2, 3, 4, 5]);
        assert_eq!(asset.mime_type, "image/png");
        assert_eq!(asset.filename, "veil.png");

        assert!(super::find_by_id(&db.pool, id + 99).await.unwrap().is_none());
    }
}
