//! Helpers for the `generate-hash` binary.

use flowerdesk_core::password::hash_password;

/// Shown in the suggested SQL when no login id is given.
pub const LOGIN_ID_PLACEHOLDER: &str = "<login_id>";

/// Shorter passwords are still hashed, with a warning.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Everything `generate-hash` prints for one password.
#[derive(Debug, Clone)]
pub struct HashReport {
    pub password: String,
    pub hash: String,
    pub sql: String,
}

impl HashReport {
    /// Hash `password` and build the matching `UPDATE` statement.
    pub fn generate(password: &str, login_id: Option<&str>) -> anyhow::Result<Self> {
        let hash = hash_password(password)?;
        let sql = suggested_update_sql(&hash, login_id.unwrap_or(LOGIN_ID_PLACEHOLDER));
        Ok(Self {
            password: password.to_string(),
            hash,
            sql,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "Password: {}\nHash:     {}\n\nSuggested SQL:\n{}\n",
            self.password, self.hash, self.sql
        )
    }
}

/// SQL that installs `hash` as the password of a funeral home.
pub fn suggested_update_sql(hash: &str, login_id: &str) -> String {
    format!(
        "UPDATE funeral_homes SET password_hash = '{}' WHERE login_id = '{}';",
        hash,
        login_id.replace('\'', "''")
    )
}
