//! Notice validation.

/// Maximum title length in characters.
pub const MAX_NOTICE_TITLE_LENGTH: usize = 200;

/// Maximum body length in characters.
pub const MAX_NOTICE_CONTENT_LENGTH: usize = 20_000;

/// Validate a notice title.
pub fn validate_notice_title(title: &str) -> Result<(), String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Notice title must not be empty".to_string());
    }
    if trimmed.chars().count() > MAX_NOTICE_TITLE_LENGTH {
        return Err(format!(
            "Notice title must be at most {MAX_NOTICE_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a notice body. Empty bodies are allowed.
pub fn validate_notice_content(content: &str) -> Result<(), String> {
    if content.chars().count() > MAX_NOTICE_CONTENT_LENGTH {
        return Err(format!(
            "Notice content must be at most {MAX_NOTICE_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_notice_title("설 연휴 배송 안내").is_ok());
        assert!(validate_notice_title(" ").is_err());
        assert!(validate_notice_title(&"가".repeat(MAX_NOTICE_TITLE_LENGTH)).is_ok());
        assert!(validate_notice_title(&"가".repeat(MAX_NOTICE_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn content_bounds() {
        assert!(validate_notice_content("").is_ok());
        assert!(validate_notice_content(&"a".repeat(MAX_NOTICE_CONTENT_LENGTH + 1)).is_err());
    }
}
