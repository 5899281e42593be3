//! Asset Model
//!
//! Binary image blob with a MIME type, referenced by products.
//! Write-once, read-many: no update or delete path exists.

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Asset {
    pub id: i64,
    /// Advisory only — the original upload name
    pub filename: String,
    pub data: Vec<u8>,
    /// Served verbatim as Content-Type
    pub mime_type: String,
}
