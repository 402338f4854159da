//! Required-field checks for funeral records.
//!
//! Everything else on a record is stored as given.

/// Validate a room identifier: non-empty, no surrounding whitespace, no
/// path separators.
pub fn validate_room_id(room_id: &str) -> Result<(), String> {
    if room_id.trim().is_empty() {
        return Err("Room id must not be empty".to_string());
    }
    if room_id.trim() != room_id {
        return Err("Room id must not start or end with whitespace".to_string());
    }
    if room_id.contains(['/', '\\']) {
        return Err("Room id must not contain slashes".to_string());
    }
    Ok(())
}

/// Validate the deceased's name: required.
pub fn validate_deceased_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Deceased name must not be empty".to_string());
    }
    Ok(())
}
