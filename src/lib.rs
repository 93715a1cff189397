pub mod models;
pub mod handlers;
pub mod services;
pub mod middleware;
pub mod config;
pub mod errors;

use axum::{
    extract::FromRef,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use axum_extra::extract::cookie::Key;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    services::{session::session_key, UserStore, WakeClient},
};

/// Shared between all handlers.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Config,
    pub users: UserStore,
    pub wake: WakeClient,
    pub key: Key,
}

impl AppState {
    /// Build state from configuration. A missing session secret is fatal here.
    pub async fn new(config: Config) -> AppResult<Self> {
        let key = signing_key(&config)?;
        let users = UserStore::connect(&config.database.url).await?;
        users.init_schema().await?;

        if config.auth.disable_login {
            tracing::warn!("Authentication is disabled; all sessions will be cleared");
        }

        Ok(Self {
            wake: WakeClient::new(&config.wake),
            key,
            users,
            config,
        })
    }
}

fn signing_key(config: &Config) -> AppResult<Key> {
    config
        .auth
        .secret_key
        .as_deref()
        .filter(|secret| !secret.is_empty())
        .map(session_key)
        .ok_or_else(|| AppError::Config("SECRET_KEY must be set before creating the app".into()))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::serve_login_page).post(handlers::handle_login))
        .route("/signup", get(handlers::serve_signup_page).post(handlers::handle_signup))
        .route("/logout", get(handlers::handle_logout))
        .route("/download/:file", get(handlers::download))

        .route("/api/changeRole", post(handlers::change_role))
        .route("/api/deleteUser", post(handlers::delete_user))
        .route("/api/wake", post(handlers::wake))

        .layer(from_fn_with_state(state.clone(), middleware::enforce_disabled_auth))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(state.config.server.max_body_size))
        .with_state(state)
}
