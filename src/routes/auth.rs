use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{CookieJar, Form};
use nagoyameshi_access::Route;
use serde::Deserialize;

use crate::{
    auth::{Space, build_cookie, removal_cookie},
    command::RegisterInput,
    error::{AppError, Result},
    gate::{flash, redirect},
    password::verify_password,
    query,
    routes::AppState,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registers a member and signs them in right away.
pub async fn register(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<RegisterInput>,
) -> Result<(CookieJar, Response)> {
    let id = app_state.command.register(input).await?;
    let cookie = build_cookie(&app_state.config.jwt, Space::Member, id)?;

    Ok((jar.add(cookie), flash(Route::Home, "registration completed")))
}

pub async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Response)> {
    let Some((id, hash)) = query::user::find_credentials(&app_state.read_db, &form.email).await?
    else {
        tracing::info!("login with unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&form.password, &hash) {
        tracing::info!(user_id = id, "login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let cookie = build_cookie(&app_state.config.jwt, Space::Member, id)?;
    tracing::info!(user_id = id, "member logged in");

    Ok((jar.add(cookie), redirect(Route::Home).into_response()))
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(removal_cookie(Space::Member)),
        redirect(Route::Home),
    )
}

pub async fn admin_login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Response)> {
    let Some((id, hash)) =
        query::admin::find_credentials(&app_state.read_db, &form.email).await?
    else {
        tracing::info!("admin login with unknown email");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&form.password, &hash) {
        tracing::info!(admin_id = id, "admin login with wrong password");
        return Err(AppError::InvalidCredentials);
    }

    let cookie = build_cookie(&app_state.config.jwt, Space::Admin, id)?;
    tracing::info!(admin_id = id, "administrator logged in");

    Ok((jar.add(cookie), redirect(Route::AdminHome).into_response()))
}

pub async fn admin_logout(jar: CookieJar) -> impl IntoResponse {
    (
        jar.remove(removal_cookie(Space::Admin)),
        redirect(Route::AdminLogin),
    )
}
