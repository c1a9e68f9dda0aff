/// Record identifiers are UUIDs assigned by the store on insert.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a client-supplied identifier.
///
/// Returns `None` for anything that is not a well-formed UUID. Such a value
/// can never match a stored record.
pub fn parse_id(raw: &str) -> Option<DbId> {
    uuid::Uuid::parse_str(raw.trim()).ok()
}
