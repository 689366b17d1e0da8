use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use nagoyameshi_access::{
    OwnedResource, Ownership, Principal, Route, UNAUTHORIZED_ACCESS, ownership::check_ownership,
};

use crate::{
    command::ProfileInput,
    error::{AppError, Result},
    gate::{CurrentMember, Notice, flash, redirect_with},
    query,
    routes::AppState,
};

pub async fn index(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
) -> Result<impl IntoResponse> {
    let user = query::user::find(&app_state.read_db, member_id)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    Ok(Json(user))
}

pub async fn edit(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<Response> {
    if let Ownership::Deny(route) =
        check_ownership(&principal, &OwnedResource::UserProfile { owner_id: id })
    {
        return Ok(redirect_with(route, Notice::Error(UNAUTHORIZED_ACCESS.to_owned())));
    }

    let user = query::user::find(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    Ok(Json(user).into_response())
}

pub async fn update(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Form(input): Form<ProfileInput>,
) -> Result<Response> {
    if let Ownership::Deny(route) =
        check_ownership(&principal, &OwnedResource::UserProfile { owner_id: id })
    {
        return Ok(redirect_with(route, Notice::Error(UNAUTHORIZED_ACCESS.to_owned())));
    }

    app_state.command.update_profile(id, input).await?;

    Ok(flash(Route::UserIndex, "profile updated"))
}
