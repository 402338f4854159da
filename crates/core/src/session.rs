//! Funeral-home session cookies.
//!
//! A login sets three cookies together and a logout clears all three.
//! Every value is HMAC-signed as `value.signature` so the server can trust
//! what it reads back; the home name is percent-encoded first because it is
//! usually Hangul. [`SessionContext`] is built from a verified cookie set
//! and handed to handlers by value.

use serde::Serialize;

use crate::hashing::{hmac_sha256_hex, verify_hmac_sha256_hex};
use crate::types::DbId;

/// Cookie flagging an authenticated funeral-home session.
pub const COOKIE_AUTHENTICATED: &str = "funeral_authenticated";

/// Cookie holding the funeral home id.
pub const COOKIE_HOME_ID: &str = "funeral_home_id";

/// Cookie holding the funeral home display name.
pub const COOKIE_HOME_NAME: &str = "funeral_home_name";

/// All session cookie names; set and cleared as a unit.
pub const SESSION_COOKIES: [&str; 3] = [COOKIE_AUTHENTICATED, COOKIE_HOME_ID, COOKIE_HOME_NAME];

/// Value of [`COOKIE_AUTHENTICATED`] for a logged-in session.
pub const AUTHENTICATED_VALUE: &str = "true";

// ---------------------------------------------------------------------------
// Session context
// ---------------------------------------------------------------------------

/// The verified identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub funeral_home_id: DbId,
    pub funeral_home_name: String,
}

impl SessionContext {
    /// Build a context from raw `(name, value)` cookie pairs.
    ///
    /// Returns `None` unless all three cookies are present with valid
    /// signatures, the authenticated flag is `"true"`, and the id parses.
    pub fn from_cookies<'a, I>(cookies: I, secret: &str) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut authenticated = None;
        let mut home_id = None;
        let mut home_name = None;

        for (name, value) in cookies {
            let slot = match name {
                COOKIE_AUTHENTICATED => &mut authenticated,
                COOKIE_HOME_ID => &mut home_id,
                COOKIE_HOME_NAME => &mut home_name,
                _ => continue,
            };
            *slot = Some(verify_cookie_value(secret, name, value)?);
        }

        if authenticated? != AUTHENTICATED_VALUE {
            return None;
        }
        let funeral_home_id = home_id?.parse().ok()?;
        let funeral_home_name = percent_decode(&home_name?)?;

        Some(Self {
            funeral_home_id,
            funeral_home_name,
        })
    }

    /// The three `(name, signed value)` pairs that encode this session.
    pub fn to_cookie_values(&self, secret: &str) -> [(&'static str, String); 3] {
        [
            (
                COOKIE_AUTHENTICATED,
                sign_cookie_value(secret, COOKIE_AUTHENTICATED, AUTHENTICATED_VALUE),
            ),
            (
                COOKIE_HOME_ID,
                sign_cookie_value(secret, COOKIE_HOME_ID, &self.funeral_home_id.to_string()),
            ),
            (
                COOKIE_HOME_NAME,
                sign_cookie_value(
                    secret,
                    COOKIE_HOME_NAME,
                    &percent_encode(&self.funeral_home_name),
                ),
            ),
        ]
    }
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// Sign `value` for cookie `name`. The name is part of the MAC so a value
/// cannot be replayed under another cookie.
pub fn sign_cookie_value(secret: &str, name: &str, value: &str) -> String {
    let sig = hmac_sha256_hex(secret, &format!("{name}={value}"));
    format!("{value}.{sig}")
}

/// Verify a signed cookie value and return the unsigned part.
pub fn verify_cookie_value(secret: &str, name: &str, signed: &str) -> Option<String> {
    let (value, sig) = signed.rsplit_once('.')?;
    verify_hmac_sha256_hex(secret, &format!("{name}={value}"), sig).then(|| value.to_string())
}

// ---------------------------------------------------------------------------
// Cookie header parsing / building
// ---------------------------------------------------------------------------

/// Split a `Cookie` request header into `(name, value)` pairs.
pub fn parse_cookie_header(header: &str) -> impl Iterator<Item = (&str, &str)> {
    header.split(';').filter_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        (!name.is_empty()).then(|| (name, value.trim().trim_matches('"')))
    })
}

/// Attributes applied to every session cookie.
#[derive(Debug, Clone, Copy)]
pub struct CookieOptions {
    pub max_age_secs: i64,
    pub secure: bool,
}

/// Build a `Set-Cookie` header value that stores a session cookie.
pub fn build_set_cookie(name: &str, value: &str, opts: CookieOptions) -> String {
    let mut cookie = format!(
        "{name}={value}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        opts.max_age_secs
    );
    if opts.secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a `Set-Cookie` header value that deletes a cookie.
pub fn build_removal_cookie(name: &str, secure: bool) -> String {
    let mut cookie = format!(
        "{name}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT; HttpOnly; SameSite=Lax"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

// ---------------------------------------------------------------------------
// percent encoding helper (no extra dep)
// ---------------------------------------------------------------------------

/// Percent-encode everything except unreserved ASCII.
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

/// Inverse of [`percent_encode`]; `None` on malformed escapes or bad UTF-8.
pub fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = s.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn context() -> SessionContext {
        SessionContext {
            funeral_home_id: 7,
            funeral_home_name: "서울 추모공원 장례식장".into(),
        }
    }

    fn signed_pairs(ctx: &SessionContext) -> Vec<(String, String)> {
        ctx.to_cookie_values(SECRET)
            .into_iter()
            .map(|(n, v)| (n.to_string(), v))
            .collect()
    }

    #[test]
    fn cookie_values_round_trip_into_context() {
        let ctx = context();
        let pairs = signed_pairs(&ctx);
        let parsed =
            SessionContext::from_cookies(pairs.iter().map(|(n, v)| (n.as_str(), v.as_str())), SECRET);
        assert_eq!(parsed, Some(ctx));
    }

    #[test]
    fn missing_cookie_yields_no_session() {
        let pairs = signed_pairs(&context());
        let partial = pairs
            .iter()
            .filter(|(n, _)| n != COOKIE_HOME_NAME)
            .map(|(n, v)| (n.as_str(), v.as_str()));
        assert_eq!(SessionContext::from_cookies(partial, SECRET), None);
    }

    #[test]
    fn wrong_secret_yields_no_session() {
        let pairs = signed_pairs(&context());
        let parsed = SessionContext::from_cookies(
            pairs.iter().map(|(n, v)| (n.as_str(), v.as_str())),
            "other-secret",
        );
        assert_eq!(parsed, None);
    }

    #[test]
    fn unsigned_values_are_rejected() {
        let cookies = [
            (COOKIE_AUTHENTICATED, "true"),
            (COOKIE_HOME_ID, "7"),
            (COOKIE_HOME_NAME, "x"),
        ];
        assert_eq!(SessionContext::from_cookies(cookies, SECRET), None);
    }

    #[test]
    fn value_cannot_move_between_cookies() {
        let id_value = sign_cookie_value(SECRET, COOKIE_HOME_ID, "true");
        assert_eq!(verify_cookie_value(SECRET, COOKIE_AUTHENTICATED, &id_value), None);
        assert_eq!(
            verify_cookie_value(SECRET, COOKIE_HOME_ID, &id_value).as_deref(),
            Some("true")
        );
    }

    #[test]
    fn authenticated_flag_must_be_true() {
        let cookies = [
            (
                COOKIE_AUTHENTICATED,
                sign_cookie_value(SECRET, COOKIE_AUTHENTICATED, "false"),
            ),
            (COOKIE_HOME_ID, sign_cookie_value(SECRET, COOKIE_HOME_ID, "7")),
            (COOKIE_HOME_NAME, sign_cookie_value(SECRET, COOKIE_HOME_NAME, "x")),
        ];
        let parsed =
            SessionContext::from_cookies(cookies.iter().map(|(n, v)| (*n, v.as_str())), SECRET);
        assert_eq!(parsed, None);
    }

    #[test]
    fn parses_cookie_header() {
        let pairs: Vec<_> = parse_cookie_header("a=1; b = two ;c=\"3\"; junk; =x").collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "two"), ("c", "3")]);
    }

    #[test]
    fn set_cookie_attributes() {
        let opts = CookieOptions {
            max_age_secs: 60,
            secure: true,
        };
        let c = build_set_cookie(COOKIE_HOME_ID, "7.abc", opts);
        assert!(c.starts_with("funeral_home_id=7.abc; Path=/; Max-Age=60"));
        assert!(c.contains("HttpOnly"));
        assert!(c.ends_with("; Secure"));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let c = build_removal_cookie(COOKIE_AUTHENTICATED, false);
        assert!(c.starts_with("funeral_authenticated=;"));
        assert!(c.contains("Max-Age=0"));
        assert!(!c.contains("Secure"));
    }

    #[test]
    fn percent_encoding_round_trips_hangul() {
        let name = "서울 추모공원";
        let encoded = percent_encode(name);
        assert!(encoded.is_ascii());
        assert!(!encoded.contains(' '));
        assert_eq!(percent_decode(&encoded).as_deref(), Some(name));
    }

    #[test]
    fn percent_decode_rejects_truncated_escape() {
        assert_eq!(percent_decode("%E"), None);
        assert_eq!(percent_decode("%ZZ"), None);
    }
}
