//! HMAC-SHA256 and digest comparison helpers.
//!
//! Used for signing session cookie values and for comparing the admin API
//! key without leaking timing information about its contents.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

type HmacSha256 = Hmac<Sha256>;

/// Compute an HMAC-SHA256 signature of `payload`, hex encoded.
pub fn hmac_sha256_hex(secret: &str, payload: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a hex-encoded HMAC-SHA256 signature in constant time.
pub fn verify_hmac_sha256_hex(secret: &str, payload: &str, signature_hex: &str) -> bool {
    let Some(signature) = hex::decode(signature_hex) else {
        return false;
    };
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    mac.verify_slice(&signature).is_ok()
}

/// Compare two secrets by digest so the comparison time does not depend on
/// where the inputs first differ.
pub fn digest_eq(a: &str, b: &str) -> bool {
    let a = Sha256::digest(a.as_bytes());
    let b = Sha256::digest(b.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

// ---------------------------------------------------------------------------
// hex encoding helper (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string; `None` on odd length or non-hex characters.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_round_trips_through_verify() {
        let sig = hmac_sha256_hex("secret", "42");
        assert_eq!(sig.len(), 64);
        assert!(verify_hmac_sha256_hex("secret", "42", &sig));
    }

    #[test]
    fn hmac_rejects_other_secret_or_payload() {
        let sig = hmac_sha256_hex("secret", "42");
        assert!(!verify_hmac_sha256_hex("other", "42", &sig));
        assert!(!verify_hmac_sha256_hex("secret", "43", &sig));
    }

    #[test]
    fn hmac_rejects_malformed_signature() {
        assert!(!verify_hmac_sha256_hex("secret", "42", "zz"));
        assert!(!verify_hmac_sha256_hex("secret", "42", "abc"));
        assert!(!verify_hmac_sha256_hex("secret", "42", ""));
    }

    #[test]
    fn digest_eq_matches_only_identical_inputs() {
        assert!(digest_eq("admin-key", "admin-key"));
        assert!(!digest_eq("admin-key", "admin-kez"));
        assert!(!digest_eq("admin-key", ""));
    }
}
