//! Session state carried in a single signed cookie.
//!
//! There is no server-side session table: the cookie holds the user id and
//! username, signed with a key derived from the configured secret.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

use crate::errors::{AppError, AppResult};
use crate::models::{SessionData, User};

pub const SESSION_COOKIE: &str = "session";

/// Stretch an arbitrary-length secret into a 64-byte signing key.
pub fn session_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// The session in `jar`, if the cookie is present, correctly signed and well formed.
pub fn read(jar: &SignedCookieJar) -> Option<SessionData> {
    let cookie = jar.get(SESSION_COOKIE)?;
    let payload = urlencoding::decode(cookie.value()).ok()?;
    match serde_json::from_str(&payload) {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!("Discarding malformed session payload: {}", e);
            None
        }
    }
}

pub fn establish(jar: SignedCookieJar, user: &User) -> AppResult<SignedCookieJar> {
    let data = SessionData {
        session_id: user.id,
        username: user.username.clone(),
    };
    let payload = serde_json::to_string(&data).map_err(|e| AppError::Session(e.to_string()))?;

    let cookie = Cookie::build((SESSION_COOKIE, urlencoding::encode(&payload).into_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    Ok(jar.add(cookie))
}

pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            username: "alice, \"the admin\"".into(),
            password_hash: String::new(),
            role: 0,
        }
    }

    #[test]
    fn established_session_reads_back() {
        let jar = SignedCookieJar::new(session_key("secret"));
        let jar = establish(jar, &user()).unwrap();

        let data = read(&jar).unwrap();
        assert_eq!(data.session_id, 7);
        assert_eq!(data.username, "alice, \"the admin\"");
    }

    #[test]
    fn cleared_jar_has_no_session() {
        let jar = SignedCookieJar::new(session_key("secret"));
        let jar = clear(establish(jar, &user()).unwrap());
        assert!(read(&jar).is_none());
    }

    #[test]
    fn short_secrets_still_yield_a_key() {
        let a = session_key("x");
        let b = session_key("y");
        assert_ne!(a.master(), b.master());
    }
}
