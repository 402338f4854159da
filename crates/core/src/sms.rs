//! Phone number normalization and SMS message classification.
//!
//! Korean SMS gateways bill by the legacy EUC-KR byte count: ASCII
//! characters take one byte, everything else two. Messages up to
//! [`SMS_MAX_BYTES`] go out as short SMS; longer ones as LMS up to
//! [`LMS_MAX_BYTES`].

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Byte budget of a single short message.
pub const SMS_MAX_BYTES: usize = 90;

/// Byte budget of a long message.
pub const LMS_MAX_BYTES: usize = 2000;

static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[016789][0-9]{7,8}$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(01[016789][0-9]{7,8}|02[0-9]{7,8}|0[3-6][1-5][0-9]{7,8}|070[0-9]{7,8}|1[5-9][0-9]{6})$")
        .expect("valid regex")
});

// ---------------------------------------------------------------------------
// Phone numbers
// ---------------------------------------------------------------------------

/// Strip separators and convert a `+82` country prefix to the domestic `0`.
///
/// `"010-1234-5678"`, `"010 1234 5678"` and `"+82 10-1234-5678"` all
/// normalize to `"01012345678"`.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let (prefix, rest) = match trimmed.strip_prefix("+82") {
        Some(rest) => ("0", rest),
        None => ("", trimmed),
    };
    let digits: String = rest.chars().filter(char::is_ascii_digit).collect();
    if prefix.is_empty() {
        digits
    } else {
        format!("{prefix}{}", digits.trim_start_matches('0'))
    }
}

/// Whether a normalized number is a Korean mobile number.
pub fn is_mobile_phone(normalized: &str) -> bool {
    MOBILE_RE.is_match(normalized)
}

/// Whether a normalized number is any dialable Korean number (mobile,
/// landline, internet phone, or nationwide representative number).
pub fn is_valid_phone(normalized: &str) -> bool {
    PHONE_RE.is_match(normalized)
}

/// Validate an optional contact phone, returning the normalized form.
pub fn validate_contact_phone(raw: &str) -> Result<String, String> {
    let normalized = normalize_phone(raw);
    if is_valid_phone(&normalized) {
        Ok(normalized)
    } else {
        Err(format!("'{raw}' is not a valid phone number"))
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Gateway message class, chosen by byte length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageKind {
    Sms,
    Lms,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Sms => "SMS",
            MessageKind::Lms => "LMS",
        }
    }
}

/// Byte length of a message in gateway accounting.
pub fn message_byte_len(message: &str) -> usize {
    message
        .chars()
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}

/// Pick SMS or LMS for a message that is already known to fit [`LMS_MAX_BYTES`].
pub fn classify_message(message: &str) -> MessageKind {
    if message_byte_len(message) <= SMS_MAX_BYTES {
        MessageKind::Sms
    } else {
        MessageKind::Lms
    }
}

/// A send request after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSms {
    pub to: String,
    pub message: String,
    pub kind: MessageKind,
}

/// Validate a raw `{ to, message }` pair.
pub fn validate_sms_request(to: &str, message: &str) -> Result<ValidatedSms, String> {
    let normalized = normalize_phone(to);
    if !is_mobile_phone(&normalized) {
        return Err(format!("'{to}' is not a valid mobile number"));
    }
    if message.trim().is_empty() {
        return Err("Message must not be empty".to_string());
    }
    let bytes = message_byte_len(message);
    if bytes > LMS_MAX_BYTES {
        return Err(format!(
            "Message is {bytes} bytes; the maximum is {LMS_MAX_BYTES}"
        ));
    }
    Ok(ValidatedSms {
        to: normalized,
        message: message.to_string(),
        kind: classify_message(message),
    })
}
