//! Storefront catalog server
//!
//! Backend for a small storefront: product catalog with filtered,
//! paginated browsing, session-based admin authentication, and binary
//! image assets served straight from the database.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Config, server state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── auth/          # Session keys, admin extractor
//! ├── db/            # SQLite pool, models, repositories, seeding
//! └── utils/         # Errors, logging, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState, build_router};
pub use crate::utils::logger::init_logger;
pub use crate::utils::{AppError, AppResult};
