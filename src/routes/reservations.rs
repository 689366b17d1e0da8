use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, Query};
use nagoyameshi_access::{
    OwnedResource, Ownership, Principal, Route, UNAUTHORIZED_ACCESS, ownership::check_ownership,
};
use nagoyameshi_discovery::parse_page;
use serde_json::json;

use crate::{
    command::ReservationInput,
    error::{AppError, Result},
    gate::{CurrentMember, Notice, flash, redirect_with},
    query,
    routes::{AppState, PageQuery},
};

pub async fn index(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let reservations = query::reservation::list_by_user(
        &app_state.read_db,
        member_id,
        parse_page(params.page.as_deref()),
    )
    .await?
    .map(|reservation| {
        let reserved_at = reservation.reserved_at();
        json!({ "reservation": reservation, "reserved_at": reserved_at })
    });

    Ok(Json(json!({ "reservations": reservations })))
}

pub async fn create(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let restaurant = query::restaurant::find(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("restaurant"))?;

    Ok(Json(json!({ "restaurant": restaurant })))
}

pub async fn store(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
    Path(id): Path<i64>,
    Form(input): Form<ReservationInput>,
) -> Result<Response> {
    query::restaurant::find(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("restaurant"))?;

    app_state
        .command
        .create_reservation(id, member_id, input)
        .await?;

    Ok(flash(Route::ReservationsIndex, "reservation completed"))
}

pub async fn destroy(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<Response> {
    let reservation = query::reservation::find(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("reservation"))?;

    let resource = OwnedResource::Reservation {
        owner_id: reservation.user_id,
    };

    if let Ownership::Deny(route) = check_ownership(&principal, &resource) {
        tracing::debug!(reservation_id = id, principal = ?principal, "reservation ownership denied");
        return Ok(redirect_with(route, Notice::Error(UNAUTHORIZED_ACCESS.to_owned())));
    }

    app_state.command.delete_reservation(id).await?;

    Ok(flash(Route::ReservationsIndex, "reservation canceled"))
}
