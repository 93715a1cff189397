use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;

use super::pages::{login_page, signup_page};
use crate::errors::{response::redirect_to_index, AppError, AppResult};
use crate::models::{LoginForm, SignupForm, MAX_USERNAME_LEN};
use crate::services::{hash_password, session, verify_password};
use crate::AppState;

pub async fn serve_login_page(State(state): State<AppState>) -> Response {
    if state.config.auth.disable_login {
        return redirect_to_index();
    }
    Html(login_page("")).into_response()
}

pub async fn handle_login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(login_form): Form<LoginForm>,
) -> AppResult<Response> {
    if state.config.auth.disable_login {
        return Ok(redirect_to_index());
    }

    tracing::info!("Login attempt for user: {}", login_form.username);

    let user = match state.users.find_by_username(&login_form.username).await? {
        Some(user) => user,
        None => {
            tracing::info!("User not found: {}", login_form.username);
            return Ok(Html(login_page("Invalid username or password!")).into_response());
        }
    };

    if !verify_password(&login_form.password, &user.password_hash)? {
        tracing::info!("Invalid password for user: {}", login_form.username);
        return Ok(Html(login_page("Invalid username or password!")).into_response());
    }

    let jar = session::establish(jar, &user)?;
    tracing::info!("User logged in: {}", user.username);
    Ok((jar, redirect_to_index()).into_response())
}

pub async fn serve_signup_page(State(state): State<AppState>) -> Response {
    if state.config.auth.disable_login {
        return redirect_to_index();
    }
    Html(signup_page("")).into_response()
}

pub async fn handle_signup(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(signup_form): Form<SignupForm>,
) -> AppResult<Response> {
    if state.config.auth.disable_login {
        return Ok(redirect_to_index());
    }

    let name_len = signup_form.username.chars().count();
    if name_len == 0 || name_len > MAX_USERNAME_LEN {
        return Ok(Html(signup_page(&format!(
            "Username must be between 1 and {} characters!",
            MAX_USERNAME_LEN
        )))
        .into_response());
    }

    if state.users.find_by_username(&signup_form.username).await?.is_some() {
        tracing::info!("Signup rejected, username taken: {}", signup_form.username);
        return Ok(Html(signup_page("Username already exists!")).into_response());
    }

    let password_hash = hash_password(&signup_form.password, state.config.auth.bcrypt_cost)?;

    // The unique index settles races between concurrent signups
    let user = match state.users.create(&signup_form.username, &password_hash, 0).await {
        Ok(user) => user,
        Err(AppError::UsernameTaken) => {
            tracing::info!("Signup lost race for username: {}", signup_form.username);
            return Ok(Html(signup_page("Username already exists!")).into_response());
        }
        Err(e) => return Err(e),
    };

    let jar = session::establish(jar, &user)?;
    tracing::info!("Created user {} with id {}", user.username, user.id);
    Ok((jar, redirect_to_index()).into_response())
}

pub async fn handle_logout(jar: SignedCookieJar) -> Response {
    (session::clear(jar), redirect_to_index()).into_response()
}
