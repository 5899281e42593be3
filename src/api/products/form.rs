//! Multipart product form
//!
//! The raw multipart payload is parsed once into [`ProductForm`], then
//! validated into a typed create or update command. Validation failures
//! are collected into a field-level detail list for the 400 response.

use axum::extract::Multipart;

use crate::db::models::{Category, ProductCreate, ProductUpdate};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::AppError;

/// Uploaded image payload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// Raw form fields as received — nothing validated yet
#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub length: Option<String>,
    pub is_best_seller: Option<String>,
    pub image: Option<ImageUpload>,
}

impl ProductForm {
    /// Drain the multipart stream into a form. Unknown fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            match name.as_str() {
                "image" => {
                    let filename = field.file_name().unwrap_or("upload").to_string();
                    let mime_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let data = field.bytes().await?.to_vec();
                    form.image = Some(ImageUpload {
                        filename,
                        data,
                        mime_type,
                    });
                }
                "name" => form.name = Some(field.text().await?),
                "price" => form.price = Some(field.text().await?),
                "category" => form.category = Some(field.text().await?),
                "color" => form.color = Some(field.text().await?),
                "length" => form.length = Some(field.text().await?),
                "isBestSeller" => form.is_best_seller = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validate into a create command. The image is required and must be
    /// non-empty.
    pub fn into_create(self) -> Result<(ProductCreate, ImageUpload), AppError> {
        let mut errors = Vec::new();

        let name = self.name.unwrap_or_default();
        if let Err(e) = validate_required_text(&name, "name", MAX_NAME_LEN) {
            errors.push(e);
        }

        let price = match self.price.as_deref().map(str::trim) {
            Some(raw) => match raw.parse::<i64>() {
                Ok(p) if p >= 1 => Some(p),
                Ok(_) => {
                    errors.push("price must be a positive integer".into());
                    None
                }
                Err(_) => {
                    errors.push("price must be a positive integer".into());
                    None
                }
            },
            None => {
                errors.push("price is required".into());
                None
            }
        };

        let category = match self.category.as_deref() {
            Some(raw) => match Category::parse(raw) {
                Some(c) => Some(c),
                None => {
                    errors.push(unknown_category(raw));
                    None
                }
            },
            None => {
                errors.push("category is required".into());
                None
            }
        };

        let color = normalize_optional(self.color);
        if let Err(e) = validate_optional_text(color.as_deref(), "color", MAX_SHORT_TEXT_LEN) {
            errors.push(e);
        }

        let length = match parse_optional_length(self.length.as_deref()) {
            Ok(l) => l,
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let is_best_seller = match parse_flag(self.is_best_seller.as_deref()) {
            Ok(flag) => flag.unwrap_or(false),
            Err(e) => {
                errors.push(e);
                false
            }
        };

        let image = match self.image {
            Some(image) if !image.data.is_empty() => Some(image),
            Some(_) => {
                errors.push("image must not be empty".into());
                None
            }
            None => {
                errors.push("image is required".into());
                None
            }
        };

        if !errors.is_empty() {
            return Err(AppError::ValidationDetails(errors));
        }

        // All unwraps guarded by the empty error list
        Ok((
            ProductCreate {
                name: name.trim().to_string(),
                price: price.unwrap(),
                category: category.unwrap(),
                color,
                length,
                is_best_seller,
            },
            image.unwrap(),
        ))
    }

    /// Validate into a partial update command. Every field is optional;
    /// a supplied image must be non-empty.
    pub fn into_update(self) -> Result<(ProductUpdate, Option<ImageUpload>), AppError> {
        let mut errors = Vec::new();
        let mut changes = ProductUpdate::default();

        if let Some(name) = self.name {
            match validate_required_text(&name, "name", MAX_NAME_LEN) {
                Ok(()) => changes.name = Some(name.trim().to_string()),
                Err(e) => errors.push(e),
            }
        }

        if let Some(raw) = self.price.as_deref().map(str::trim) {
            match raw.parse::<i64>() {
                Ok(p) if p >= 1 => changes.price = Some(p),
                _ => errors.push("price must be a positive integer".into()),
            }
        }

        if let Some(raw) = self.category.as_deref() {
            match Category::parse(raw) {
                Some(c) => changes.category = Some(c),
                None => errors.push(unknown_category(raw)),
            }
        }

        let color = normalize_optional(self.color);
        match validate_optional_text(color.as_deref(), "color", MAX_SHORT_TEXT_LEN) {
            Ok(()) => changes.color = color,
            Err(e) => errors.push(e),
        }

        match parse_optional_length(self.length.as_deref()) {
            Ok(l) => changes.length = l,
            Err(e) => errors.push(e),
        }

        match parse_flag(self.is_best_seller.as_deref()) {
            Ok(flag) => changes.is_best_seller = flag,
            Err(e) => errors.push(e),
        }

        let image = match self.image {
            Some(image) if !image.data.is_empty() => Some(image),
            Some(_) => {
                errors.push("image must not be empty".into());
                None
            }
            None => None,
        };

        if !errors.is_empty() {
            return Err(AppError::ValidationDetails(errors));
        }

        Ok((changes, image))
    }
}

fn unknown_category(raw: &str) -> String {
    let allowed: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    format!("unknown category '{}', expected one of: {}", raw.trim(), allowed.join(", "))
}

/// Empty strings are treated as absent
fn normalize_optional(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_optional_length(raw: Option<&str>) -> Result<Option<i64>, String> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<i64>() {
            Ok(l) if l >= 1 => Ok(Some(l)),
            _ => Err("length must be a positive whole number of centimeters".to_string()),
        },
        None => Ok(None),
    }
}

fn parse_flag(raw: Option<&str>) -> Result<Option<bool>, String> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some(raw) => match raw.to_lowercase().as_str() {
            "true" | "1" | "on" => Ok(Some(true)),
            "false" | "0" | "" => Ok(Some(false)),
            _ => Err("isBestSeller must be a boolean".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(image: Option<ImageUpload>) -> ProductForm {
        ProductForm {
            name: Some("Test Abaya".into()),
            price: Some("10000".into()),
            category: Some("abaya".into()),
            color: None,
            length: None,
            is_best_seller: None,
            image,
        }
    }

    fn image() -> ImageUpload {
        ImageUpload {
            filename: "a.jpg".into(),
            data: vec![1, 2, 3, 4, 5],
            mime_type: "image/jpeg".into(),
        }
    }

    #[test]
    fn create_requires_image() {
        let err = form_with(None).into_create().unwrap_err();
        match err {
            AppError::ValidationDetails(details) => {
                assert!(details.iter().any(|d| d.contains("image")));
            }
            other => panic!("expected validation details, got {other:?}"),
        }
    }

    #[test]
    fn create_rejects_empty_image() {
        let mut empty = image();
        empty.data.clear();
        assert!(form_with(Some(empty)).into_create().is_err());
    }

    #[test]
    fn create_accepts_valid_form() {
        let (data, img) = form_with(Some(image())).into_create().unwrap();
        assert_eq!(data.name, "Test Abaya");
        assert_eq!(data.price, 10000);
        assert_eq!(data.category, Category::Abaya);
        assert!(!data.is_best_seller);
        assert_eq!(img.data.len(), 5);
    }

    #[test]
    fn create_collects_multiple_errors() {
        let form = ProductForm {
            name: Some("".into()),
            price: Some("-5".into()),
            category: Some("hat".into()),
            ..Default::default()
        };
        match form.into_create().unwrap_err() {
            AppError::ValidationDetails(details) => assert!(details.len() >= 4),
            other => panic!("expected validation details, got {other:?}"),
        }
    }

    #[test]
    fn update_allows_sparse_fields() {
        let form = ProductForm {
            price: Some("40000".into()),
            ..Default::default()
        };
        let (changes, img) = form.into_update().unwrap();
        assert_eq!(changes.price, Some(40000));
        assert!(changes.name.is_none());
        assert!(changes.color.is_none());
        assert!(img.is_none());
        assert!(!changes.is_empty());
    }

    #[test]
    fn rejects_non_positive_length() {
        let mut form = form_with(Some(image()));
        form.length = Some("-5".into());
        assert!(form.into_create().is_err());

        let form = ProductForm {
            length: Some("0".into()),
            ..Default::default()
        };
        assert!(form.into_update().is_err());

        let mut form = form_with(Some(image()));
        form.length = Some("140".into());
        let (data, _) = form.into_create().unwrap();
        assert_eq!(data.length, Some(140));
    }

    #[test]
    fn update_rejects_bad_price() {
        let form = ProductForm {
            price: Some("cheap".into()),
            ..Default::default()
        };
        assert!(form.into_update().is_err());
    }
}
