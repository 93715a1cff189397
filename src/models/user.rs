use serde::Serialize;
use sqlx::FromRow;

use super::Role;

/// Longest username the store accepts.
pub const MAX_USERNAME_LEN: usize = 25;

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,  // bcrypt hash, never the plaintext
    pub role: i64,
}

impl User {
    pub fn role(&self) -> Role {
        Role(self.role)
    }
}

/// What the index exposes about other accounts.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: i64,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
