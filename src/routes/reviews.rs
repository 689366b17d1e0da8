use axum::{
    Extension, Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, Query};
use nagoyameshi_access::{
    OwnedResource, Ownership, Principal, ReviewDepth, Route, UNAUTHORIZED_ACCESS,
    ownership::check_ownership,
};
use nagoyameshi_discovery::parse_page;
use serde_json::json;

use crate::{
    command::ReviewInput,
    error::{AppError, Result},
    gate::{CurrentMember, Notice, flash, redirect_with},
    query::{self, review::ReviewRow},
    routes::{AppState, PageQuery},
};

async fn restaurant_exists(app_state: &AppState, id: i64) -> Result<()> {
    query::restaurant::find(&app_state.read_db, id)
        .await?
        .map(|_| ())
        .ok_or(AppError::NotFound("restaurant"))
}

/// Loads a review of `restaurant_id` and checks the principal wrote it.
async fn owned_review(
    app_state: &AppState,
    principal: &Principal,
    restaurant_id: i64,
    review_id: i64,
) -> Result<std::result::Result<ReviewRow, Response>> {
    let review = query::review::find(&app_state.read_db, review_id)
        .await?
        .filter(|review| review.restaurant_id == restaurant_id)
        .ok_or(AppError::NotFound("review"))?;

    let resource = OwnedResource::Review {
        owner_id: review.user_id,
        restaurant_id,
    };

    match check_ownership(principal, &resource) {
        Ownership::Allow => Ok(Ok(review)),
        Ownership::Deny(route) => {
            tracing::debug!(review_id, principal = ?principal, "review ownership denied");
            Ok(Err(redirect_with(
                route,
                Notice::Error(UNAUTHORIZED_ACCESS.to_owned()),
            )))
        }
    }
}

pub async fn index(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let restaurant = query::restaurant::find(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("restaurant"))?;

    let depth = ReviewDepth::for_principal(&principal);
    let reviews = query::review::list(
        &app_state.read_db,
        id,
        depth,
        parse_page(params.page.as_deref()),
    )
    .await?;

    Ok(Json(json!({
        "restaurant": restaurant,
        "reviews": reviews,
    })))
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
    Form(input): Form<ReviewInput>,
) -> Result<Response> {
    restaurant_exists(&app_state, id).await?;
    app_state.command.create_review(id, member_id, input).await?;

    Ok(flash(Route::RestaurantReviews(id), "review posted"))
}

pub async fn edit(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, review_id)): Path<(i64, i64)>,
) -> Result<Response> {
    match owned_review(&app_state, &principal, id, review_id).await? {
        Ok(review) => Ok(Json(json!({ "review": review })).into_response()),
        Err(denied) => Ok(denied),
    }
}

pub async fn update(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, review_id)): Path<(i64, i64)>,
    Form(input): Form<ReviewInput>,
) -> Result<Response> {
    if let Err(denied) = owned_review(&app_state, &principal, id, review_id).await? {
        return Ok(denied);
    }

    app_state.command.update_review(review_id, id, input).await?;

    Ok(flash(Route::RestaurantReviews(id), "review updated"))
}

pub async fn destroy(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path((id, review_id)): Path<(i64, i64)>,
) -> Result<Response> {
    if let Err(denied) = owned_review(&app_state, &principal, id, review_id).await? {
        return Ok(denied);
    }

    app_state.command.delete_review(review_id, id).await?;

    Ok(flash(Route::RestaurantReviews(id), "review deleted"))
}
