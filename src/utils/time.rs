//! Time helpers

/// Current Unix timestamp in milliseconds.
///
/// All persisted timestamps (`created_at`) use this representation.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
