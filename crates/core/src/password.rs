//! bcrypt password hashing and verification.
//!
//! Funeral-home credentials are stored as bcrypt hashes (`$2b$`, cost
//! [`BCRYPT_COST`]) so they stay compatible with hashes produced by the
//! `generate-hash` tool and by existing rows.

/// bcrypt work factor used for new hashes.
pub const BCRYPT_COST: u32 = 10;

/// Hash a plaintext password with bcrypt at [`BCRYPT_COST`].
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` for a mismatch and `Err` only for a malformed hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

/// Validate that a password meets minimum strength requirements.
pub fn validate_password_strength(password: &str, min_length: usize) -> Result<(), String> {
    if password.chars().count() < min_length {
        return Err(format!(
            "Password must be at least {min_length} characters long"
        ));
    }
    Ok(())
}
