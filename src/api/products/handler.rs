//! Product Handlers

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use super::form::{ImageUpload, ProductForm};
use crate::auth::AdminSession;
use crate::core::ServerState;
use crate::db::models::{Category, Product, ProductFilter};
use crate::db::repository::{
    asset,
    product::{self, DEFAULT_BEST_SELLER_LIMIT, DEFAULT_PAGE_SIZE},
};
use crate::utils::{AppError, AppResult};

/// Raw query-string parameters for the catalog listing.
///
/// Everything arrives as a string; coercion happens in [`list`] so a
/// garbled number degrades to the default instead of failing the whole
/// request. An unknown category is rejected outright because silently
/// ignoring it would return the unfiltered catalog.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub color: Option<String>,
    pub length: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub products: Vec<Product>,
    pub total: i64,
}

#[derive(Debug, Deserialize)]
pub struct BestSellerQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

fn parse_i64_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok()).unwrap_or(default)
}

fn parse_optional_i64(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation("Invalid product id"))
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// GET /api/products
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListResponse>> {
    let category = match query.category.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match Category::parse(raw) {
            Some(c) => Some(c),
            None => {
                return Err(AppError::validation(format!(
                    "Unknown category '{raw}'"
                )));
            }
        },
        None => None,
    };

    let filter = ProductFilter {
        category,
        search: non_empty(query.search),
        min_price: parse_optional_i64(query.min_price.as_deref()),
        max_price: parse_optional_i64(query.max_price.as_deref()),
        color: non_empty(query.color),
        length: parse_optional_i64(query.length.as_deref()),
    };

    let page = parse_i64_or(query.page.as_deref(), 1);
    let page_size = parse_i64_or(query.limit.as_deref(), DEFAULT_PAGE_SIZE);

    let (products, total) = product::list(state.pool(), &filter, page, page_size).await?;
    Ok(Json(ListResponse { products, total }))
}

/// GET /api/products/bestsellers
pub async fn best_sellers(
    State(state): State<ServerState>,
    Query(query): Query<BestSellerQuery>,
) -> AppResult<Json<Vec<Product>>> {
    let limit = parse_i64_or(query.limit.as_deref(), DEFAULT_BEST_SELLER_LIMIT);
    let products = product::best_sellers(state.pool(), limit).await?;
    Ok(Json(products))
}

/// GET /api/products/filters
pub async fn filter_facets(
    State(state): State<ServerState>,
) -> AppResult<Json<FiltersResponse>> {
    let colors = product::distinct_colors(state.pool()).await?;
    let sizes = product::distinct_lengths(state.pool()).await?;
    Ok(Json(FiltersResponse { colors, sizes }))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = product::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    Ok(Json(product))
}

async fn store_image(state: &ServerState, image: &ImageUpload) -> AppResult<i64> {
    let asset_id = asset::create(
        state.pool(),
        &image.filename,
        &image.data,
        &image.mime_type,
    )
    .await?;
    Ok(asset_id)
}

/// POST /api/products
///
/// The asset row is written before the product row; a crash between the
/// two leaves an orphaned asset, which is accepted.
pub async fn create(
    State(state): State<ServerState>,
    _admin: AdminSession,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Product>)> {
    let form = ProductForm::from_multipart(multipart).await?;
    let (data, image) = form.into_create()?;

    let asset_id = store_image(&state, &image).await?;
    let product = product::create(state.pool(), &data, asset_id).await?;

    tracing::info!(product_id = product.id, name = %product.name, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// PATCH /api/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<Product>> {
    let id = parse_id(&id)?;
    let form = ProductForm::from_multipart(multipart).await?;
    let (mut changes, image) = form.into_update()?;

    // Existence check first so a replacement image is not stored for an
    // unknown id.
    if product::find_by_id(state.pool(), id).await?.is_none() {
        return Err(AppError::not_found("Product not found"));
    }

    if let Some(image) = &image {
        changes.asset_id = Some(store_image(&state, image).await?);
    }

    let product = product::update(state.pool(), id, &changes)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;

    tracing::info!(product_id = product.id, "Product updated");

    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_id(&id)?;
    if !product::delete(state.pool(), id).await? {
        return Err(AppError::not_found("Product not found"));
    }

    tracing::info!(product_id = id, "Product deleted");

    Ok(Json(SuccessResponse { success: true }))
}
