//! Delivery-completion payloads and their validation.
//!
//! A completion is recorded once per order when the florist confirms
//! delivery: who received it, an optional note, and up to
//! [`MAX_COMPLETION_PHOTOS`] photos. Everything here runs before any photo
//! is written to storage.

use serde::{Deserialize, Serialize};

use crate::sms::validate_contact_phone;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum photos attached to one completion.
pub const MAX_COMPLETION_PHOTOS: usize = 5;

/// Maximum size of a single photo in bytes (10 MiB).
pub const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Maximum note length in characters.
pub const MAX_NOTE_LENGTH: usize = 1000;

/// Accepted photo content types and the extension used when storing them.
pub const PHOTO_CONTENT_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
];

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Metadata of an uploaded photo, known before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoMeta {
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

/// Completion fields as the submission form collects them.
///
/// `memo` is always present on the form; a blank memo means "no note".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionFormData {
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub memo: String,
}

/// Completion payload passed from the form to the submission step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionData {
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub note: Option<String>,
}

/// The persisted completion as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub order_id: DbId,
    pub recipient_name: String,
    pub recipient_phone: Option<String>,
    pub note: Option<String>,
    pub photo_urls: Vec<String>,
    pub completed_at: Timestamp,
}

impl From<CompletionFormData> for CompletionData {
    fn from(form: CompletionFormData) -> Self {
        let memo = form.memo.trim();
        Self {
            recipient_name: form.recipient_name.trim().to_string(),
            recipient_phone: form
                .recipient_phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            note: (!memo.is_empty()).then(|| memo.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the recipient name: required.
pub fn validate_recipient_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Recipient name is required".to_string());
    }
    Ok(())
}

/// Validate an optional note.
pub fn validate_note(note: Option<&str>) -> Result<(), String> {
    match note {
        Some(n) if n.chars().count() > MAX_NOTE_LENGTH => Err(format!(
            "Note must be at most {MAX_NOTE_LENGTH} characters"
        )),
        _ => Ok(()),
    }
}

/// Storage extension for an accepted photo content type.
pub fn photo_extension(content_type: &str) -> Option<&'static str> {
    PHOTO_CONTENT_TYPES
        .iter()
        .find(|(ct, _)| ct.eq_ignore_ascii_case(content_type))
        .map(|&(_, ext)| ext)
}

/// Validate a single photo's type and size.
pub fn validate_photo(photo: &PhotoMeta) -> Result<(), String> {
    if photo_extension(&photo.content_type).is_none() {
        return Err(format!(
            "Photo '{}' has unsupported type '{}'",
            photo.file_name, photo.content_type
        ));
    }
    if photo.size > MAX_PHOTO_BYTES {
        return Err(format!(
            "Photo '{}' exceeds the {} MiB limit",
            photo.file_name,
            MAX_PHOTO_BYTES / (1024 * 1024)
        ));
    }
    Ok(())
}

/// Validate a whole completion submission and return it with the phone
/// number normalized.
pub fn validate_completion(
    data: CompletionData,
    photos: &[PhotoMeta],
) -> Result<CompletionData, String> {
    validate_recipient_name(&data.recipient_name)?;
    let recipient_phone = data
        .recipient_phone
        .as_deref()
        .map(validate_contact_phone)
        .transpose()?;
    validate_note(data.note.as_deref())?;

    if photos.len() > MAX_COMPLETION_PHOTOS {
        return Err(format!(
            "At most {MAX_COMPLETION_PHOTOS} photos may be attached"
        ));
    }
    photos.iter().try_for_each(validate_photo)?;

    Ok(CompletionData {
        recipient_phone,
        ..data
    })
}
