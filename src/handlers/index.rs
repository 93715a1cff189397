use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppResult;
use crate::middleware::Caller;
use crate::models::{Role, UserSummary};
use crate::services::Catalog;
use crate::AppState;

/// Everything the landing page needs, scoped to the caller's role.
#[derive(Debug, Serialize)]
pub struct IndexView {
    pub projects: Catalog,
    pub public_project_count: usize,
    pub amount_able_to_view: usize,
    pub logged_in: bool,
    pub username: String,
    pub role: Role,
    pub users: Vec<UserSummary>,
    pub disable_log_in: bool,
}

pub async fn index(
    State(state): State<AppState>,
    caller: Caller,
) -> AppResult<Json<IndexView>> {
    let projects = Catalog::load(&state.config.storage.projects_file).await?;

    let users = if caller.logged_in() {
        state.users.list().await?.into_iter().map(UserSummary::from).collect()
    } else {
        Vec::new()
    };

    tracing::debug!("Rendering index for role {:?}", caller.role);

    Ok(Json(IndexView {
        public_project_count: projects.public_count(),
        amount_able_to_view: projects.viewable_private_count(caller.role),
        logged_in: caller.logged_in(),
        username: caller.username().unwrap_or_default().to_string(),
        role: caller.role,
        users,
        disable_log_in: state.config.auth.disable_login,
        projects,
    }))
}
