use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::{IntoResponse, Response},
};

use crate::errors::{response::redirect_to_index, AppError, AppResult};
use crate::middleware::Caller;
use crate::models::{ChangeRoleForm, DeleteUserForm, Permission};
use crate::AppState;

/// Admins only. Every outcome, including refusal, ends in a redirect to the index.
pub async fn change_role(
    State(state): State<AppState>,
    caller: Caller,
    form: Result<Form<ChangeRoleForm>, FormRejection>,
) -> AppResult<Response> {
    if !caller.has(Permission::Admin) {
        tracing::warn!("Role change refused for {:?}", caller.username());
        return Err(AppError::Unauthorized);
    }

    let Ok(Form(form)) = form else {
        tracing::warn!("Ignoring role change with unreadable form");
        return Ok(redirect_to_index());
    };

    let (Ok(id), Ok(role)) = (form.id.trim().parse::<i64>(), form.role.trim().parse::<i64>()) else {
        tracing::warn!("Ignoring role change with id={:?} role={:?}", form.id, form.role);
        return Ok(redirect_to_index());
    };

    if state.users.update_role(id, role).await? {
        tracing::info!("{:?} set role of user {} to {}", caller.username(), id, role);
    } else {
        tracing::info!("Role change skipped, no user with id {}", id);
    }
    Ok(redirect_to_index())
}

pub async fn delete_user(
    State(state): State<AppState>,
    caller: Caller,
    form: Result<Form<DeleteUserForm>, FormRejection>,
) -> AppResult<Response> {
    if !caller.has(Permission::Admin) {
        tracing::warn!("User deletion refused for {:?}", caller.username());
        return Err(AppError::Unauthorized);
    }

    let Ok(Form(form)) = form else {
        tracing::warn!("Ignoring deletion with unreadable form");
        return Ok(redirect_to_index());
    };

    let Ok(id) = form.id.trim().parse::<i64>() else {
        tracing::warn!("Ignoring deletion with id={:?}", form.id);
        return Ok(redirect_to_index());
    };

    if state.users.delete(id).await? {
        tracing::info!("{:?} deleted user {}", caller.username(), id);
    } else {
        tracing::info!("Deletion skipped, no user with id {}", id);
    }
    Ok(redirect_to_index())
}

/// Ask the upstream service to wake for the caller. Failure looks like refusal.
pub async fn wake(State(state): State<AppState>, caller: Caller) -> Response {
    let Some(username) = caller.username().filter(|_| caller.has(Permission::Member)) else {
        return redirect_to_index();
    };

    match state.wake.wake(username).await {
        Ok(true) => {
            tracing::info!("Wake succeeded for {}", username);
            "OK".into_response()
        }
        Ok(false) => {
            tracing::warn!("Wake upstream rejected request for {}", username);
            redirect_to_index()
        }
        Err(e) => {
            tracing::warn!("Wake upstream unreachable for {}: {}", username, e);
            redirect_to_index()
        }
    }
}
