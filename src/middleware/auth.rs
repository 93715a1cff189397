use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Key, SignedCookieJar};

use crate::errors::{response::redirect_to_index, AppError, AppResult};
use crate::models::{Permission, Project, Role, SessionData, User};
use crate::services::{session, UserStore};
use crate::AppState;

/// Who is making the request, resolved once per request from the session cookie.
#[derive(Debug, Clone)]
pub struct Caller {
    pub session: Option<SessionData>,
    pub user: Option<User>,
    pub role: Role,
}

impl Caller {
    pub fn anonymous() -> Self {
        Self {
            session: None,
            user: None,
            role: Role::ANONYMOUS,
        }
    }

    /// Turn a session into a caller. Sessions naming a user that no longer
    /// exists, or whose id disagrees with the stored user, count as anonymous.
    pub async fn resolve(users: &UserStore, session: Option<SessionData>) -> AppResult<Self> {
        let Some(session) = session else {
            return Ok(Self::anonymous());
        };

        match users.find_by_username(&session.username).await? {
            Some(user) if user.id == session.session_id => Ok(Self {
                role: user.role(),
                user: Some(user),
                session: Some(session),
            }),
            _ => {
                tracing::warn!("Ignoring stale session for user: {}", session.username);
                Ok(Self::anonymous())
            }
        }
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.username.as_str())
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.logged_in() && self.role.at_least(permission)
    }

    // Checked regardless of `project.private`.
    pub fn can_download(&self, project: &Project) -> bool {
        self.logged_in() && self.role.satisfies(project.role)
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        if state.config.auth.disable_login {
            return Ok(Self::anonymous());
        }

        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|never| -> AppError { match never {} })?;
        Self::resolve(&state.users, session::read(&jar)).await
    }
}

/// With login disabled: drop every session and bounce the auth routes to the index.
pub async fn enforce_disabled_auth(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    req: Request,
    next: Next,
) -> Response {
    if !state.config.auth.disable_login {
        return next.run(req).await;
    }

    let jar = session::clear(jar);
    let path = req.uri().path();

    if path == "/login" || path == "/signup" || path == "/logout" {
        tracing::debug!("Login disabled, redirecting {}", path);
        return (jar, redirect_to_index()).into_response();
    }

    (jar, next.run(req).await).into_response()
}
