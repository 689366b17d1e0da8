use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::Query;
use nagoyameshi_discovery::parse_page;
use serde_json::json;

use crate::{
    error::{AppError, Result},
    gate::CurrentMember,
    query,
    routes::{AppState, PageQuery},
};

pub async fn index(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
    Query(params): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let favorites = query::favorite::list_by_user(
        &app_state.read_db,
        member_id,
        parse_page(params.page.as_deref()),
    )
    .await?;

    Ok(Json(json!({ "favorites": favorites })))
}

pub async fn store(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
    Path(restaurant_id): Path<i64>,
) -> Result<impl IntoResponse> {
    query::restaurant::find(&app_state.read_db, restaurant_id)
        .await?
        .ok_or(AppError::NotFound("restaurant"))?;

    app_state
        .command
        .add_favorite(member_id, restaurant_id)
        .await?;

    Ok(Json(json!({
        "flash_message": "added to favorites",
        "favorite": true,
    })))
}

pub async fn destroy(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
    Path(restaurant_id): Path<i64>,
) -> Result<impl IntoResponse> {
    app_state
        .command
        .remove_favorite(member_id, restaurant_id)
        .await?;

    Ok(Json(json!({
        "flash_message": "removed from favorites",
        "favorite": false,
    })))
}
