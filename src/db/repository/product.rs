//! Product Repository
//!
//! Filtered, paginated catalog queries built with `QueryBuilder`, plus
//! single-statement CRUD. Listing order is `created_at DESC, id DESC`;
//! the id tie-break keeps pages of the same query stable.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::RepoResult;
use crate::db::models::{
    CategoryCount, Product, ProductCreate, ProductFilter, ProductStats, ProductUpdate,
};
use crate::utils::now_millis;

/// Default page size for catalog listing
pub const DEFAULT_PAGE_SIZE: i64 = 12;

/// Default limit for the best-sellers shelf
pub const DEFAULT_BEST_SELLER_LIMIT: i64 = 8;

/// Upper bound on the requested page size
pub const MAX_PAGE_SIZE: i64 = 100;

const SELECT_COLUMNS: &str =
    "SELECT id, name, price, category, color, length, is_best_seller, asset_id, created_at \
     FROM products";

/// Append WHERE clauses for every present filter field (AND-combined)
fn apply_filters<'a>(qb: &mut QueryBuilder<'a, Sqlite>, filter: &'a ProductFilter) {
    let mut prefix = " WHERE ";
    if let Some(category) = filter.category {
        qb.push(prefix).push("category = ").push_bind(category.as_str());
        prefix = " AND ";
    }
    if let Some(search) = filter.search.as_deref() {
        // SQLite LIKE is case-insensitive for ASCII
        qb.push(prefix)
            .push("name LIKE ")
            .push_bind(format!("%{search}%"));
        prefix = " AND ";
    }
    if let Some(min_price) = filter.min_price {
        qb.push(prefix).push("price >= ").push_bind(min_price);
        prefix = " AND ";
    }
    if let Some(max_price) = filter.max_price {
        qb.push(prefix).push("price <= ").push_bind(max_price);
        prefix = " AND ";
    }
    if let Some(color) = filter.color.as_deref() {
        qb.push(prefix).push("color = ").push_bind(color);
        prefix = " AND ";
    }
    if let Some(length) = filter.length {
        qb.push(prefix).push("length = ").push_bind(length);
    }
}

/// Filtered, paginated listing. `page` is 1-indexed; the returned total
/// counts the filtered set before pagination. Out-of-range values are
/// clamped, never rejected: a page past the end yields an empty slice.
pub async fn list(
    pool: &SqlitePool,
    filter: &ProductFilter,
    page: i64,
    page_size: i64,
) -> RepoResult<(Vec<Product>, i64)> {
    let page = page.max(1);
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);

    let mut count_qb = QueryBuilder::new("SELECT COUNT(*) FROM products");
    apply_filters(&mut count_qb, filter);
    let total: i64 = count_qb.build_query_scalar().fetch_one(pool).await?;

    let mut qb = QueryBuilder::new(SELECT_COLUMNS);
    apply_filters(&mut qb, filter);
    qb.push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(page_size)
        .push(" OFFSET ")
        // Saturating: page comes from the query string unclamped above 1
        .push_bind((page - 1).saturating_mul(page_size));

    let products = qb.build_query_as::<Product>().fetch_all(pool).await?;
    Ok((products, total))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(product)
}

/// Products flagged as best sellers, newest first, truncated to `limit`
pub async fn best_sellers(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "{SELECT_COLUMNS} WHERE is_best_seller = 1 ORDER BY created_at DESC, id DESC LIMIT ?"
    ))
    .bind(limit.max(1))
    .fetch_all(pool)
    .await?;
    Ok(products)
}

/// Insert a product referencing an existing asset. `id` and `created_at`
/// are assigned here; caller-supplied values are never consulted.
pub async fn create(
    pool: &SqlitePool,
    data: &ProductCreate,
    asset_id: i64,
) -> RepoResult<Product> {
    let created_at = now_millis();

    let result = sqlx::query(
        "INSERT INTO products (name, price, category, color, length, is_best_seller, asset_id, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.name)
    .bind(data.price)
    .bind(data.category.as_str())
    .bind(&data.color)
    .bind(data.length)
    .bind(data.is_best_seller)
    .bind(asset_id)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(Product {
        id: result.last_insert_rowid(),
        name: data.name.clone(),
        price: data.price,
        category: data.category,
        color: data.color.clone(),
        length: data.length,
        is_best_seller: data.is_best_seller,
        asset_id,
        created_at,
    })
}

/// Apply only the fields present in `changes`; everything else keeps its
/// prior value. Returns `None` when no such product exists.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: &ProductUpdate,
) -> RepoResult<Option<Product>> {
    if changes.is_empty() {
        return find_by_id(pool, id).await;
    }

    let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE products SET ");
    {
        let mut sep = qb.separated(", ");
        if let Some(name) = &changes.name {
            sep.push("name = ").push_bind_unseparated(name);
        }
        if let Some(price) = changes.price {
            sep.push("price = ").push_bind_unseparated(price);
        }
        if let Some(category) = changes.category {
            sep.push("category = ").push_bind_unseparated(category.as_str());
        }
        if let Some(color) = &changes.color {
            sep.push("color = ").push_bind_unseparated(color);
        }
        if let Some(length) = changes.length {
            sep.push("length = ").push_bind_unseparated(length);
        }
        if let Some(is_best_seller) = changes.is_best_seller {
            sep.push("is_best_seller = ").push_bind_unseparated(is_best_seller);
        }
        if let Some(asset_id) = changes.asset_id {
            sep.push("asset_id = ").push_bind_unseparated(asset_id);
        }
    }
    qb.push(" WHERE id = ").push_bind(id);

    let result = qb.build().execute(pool).await?;
    if result.rows_affected() == 0 {
        return Ok(None);
    }

    find_by_id(pool, id).await
}

/// Hard delete. Non-cascading: the referenced asset is left in place.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Aggregate counts for the admin dashboard
pub async fn stats(pool: &SqlitePool) -> RepoResult<ProductStats> {
    let total_products: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let products_by_category = sqlx::query_as::<_, CategoryCount>(
        "SELECT category, COUNT(*) AS count FROM products GROUP BY category",
    )
    .fetch_all(pool)
    .await?;

    let best_sellers_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_best_seller = 1")
            .fetch_one(pool)
            .await?;

    Ok(ProductStats {
        total_products,
        products_by_category,
        best_sellers_count,
    })
}

/// Distinct non-null colors, for filter UIs
pub async fn distinct_colors(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let colors = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT color FROM products WHERE color IS NOT NULL",
    )
    .fetch_all(pool)
    .await?;
    Ok(colors)
}

/// Distinct non-null lengths, stringified for the filters response
pub async fn distinct_lengths(pool: &SqlitePool) -> RepoResult<Vec<String>> {
    let lengths = sqlx::query_scalar::<_, i64>(
        "SELECT DISTINCT length FROM products WHERE length IS NOT NULL",
    )
    .fetch_all(pool)
    .await?;
    Ok(lengths.into_iter().map(|l| l.to_string()).collect())
}
