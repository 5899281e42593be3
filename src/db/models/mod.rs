//! Database models

pub mod asset;
pub mod principal;
pub mod product;

pub use asset::Asset;
pub use principal::{Principal, normalize_username};
pub use product::{
    Category, CategoryCount, Product, ProductCreate, ProductFilter, ProductStats, ProductUpdate,
};
