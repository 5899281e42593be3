//! Session-based authentication
//!
//! Sessions live server-side (SQLite via the session store); the client
//! only carries the opaque cookie. A session is either anonymous or
//! fully authenticated — login sets both keys before responding, logout
//! and expiry drop the whole record.

pub mod extractor;

pub use extractor::AdminSession;

/// Session key: authenticated principal's id
pub const SESSION_PRINCIPAL_ID: &str = "principal_id";

/// Session key: admin flag, set to `true` on successful login
pub const SESSION_IS_ADMIN: &str = "is_admin";
