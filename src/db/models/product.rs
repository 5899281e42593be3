//! Product Model

use serde::{Deserialize, Serialize};

/// Closed product category enumeration
///
/// Stored as lowercase TEXT; there is no separate categories table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Category {
    Abaya,
    Scarf,
    Jallabiya,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Abaya, Category::Scarf, Category::Jallabiya];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Abaya => "abaya",
            Category::Scarf => "scarf",
            Category::Jallabiya => "jallabiya",
        }
    }

    /// Parse a category from user input (trimmed, case-insensitive)
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "abaya" => Some(Category::Abaya),
            "scarf" => Some(Category::Scarf),
            "jallabiya" => Some(Category::Jallabiya),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product record
///
/// `created_at` is Unix millis, assigned server-side at insertion.
/// `asset_id` always references an existing asset row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in the smallest whole currency unit
    pub price: i64,
    pub category: Category,
    pub color: Option<String>,
    /// Garment length in cm
    pub length: Option<i64>,
    pub is_best_seller: bool,
    pub asset_id: i64,
    pub created_at: i64,
}

/// Validated create payload (image handled separately as an asset)
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: i64,
    pub category: Category,
    pub color: Option<String>,
    pub length: Option<i64>,
    pub is_best_seller: bool,
}

/// Partial update payload — absent fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub category: Option<Category>,
    pub color: Option<String>,
    pub length: Option<i64>,
    pub is_best_seller: Option<bool>,
    /// Set only when the caller has already created a replacement asset
    pub asset_id: Option<i64>,
}

impl ProductUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.category.is_none()
            && self.color.is_none()
            && self.length.is_none()
            && self.is_best_seller.is_none()
            && self.asset_id.is_none()
    }
}

/// Catalog list filter — fields combine with logical AND
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category: Option<Category>,
    /// Case-insensitive substring match on name
    pub search: Option<String>,
    /// Inclusive bounds
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub color: Option<String>,
    pub length: Option<i64>,
}

/// Per-category product count
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Aggregate catalog statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: i64,
    pub products_by_category: Vec<CategoryCount>,
    pub best_sellers_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse(" Abaya "), Some(Category::Abaya));
        assert_eq!(Category::parse("SCARF"), Some(Category::Scarf));
        assert_eq!(Category::parse("hat"), None);
    }

    #[test]
    fn product_serializes_camel_case() {
        let product = Product {
            id: 1,
            name: "Test".into(),
            price: 100,
            category: Category::Jallabiya,
            color: None,
            length: None,
            is_best_seller: false,
            asset_id: 1,
            created_at: 0,
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category"], "jallabiya");
        assert_eq!(json["isBestSeller"], false);
        assert!(json.get("assetId").is_some());
    }
}
