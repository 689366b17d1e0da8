use axum::{Json, extract::State, response::IntoResponse};
use nagoyameshi_access::Principal;
use nagoyameshi_db::table::Restaurant;
use serde_json::json;

use crate::{
    error::{AppError, Result},
    query,
    routes::AppState,
};

const HOME_LIMIT: u64 = 6;

pub async fn page(
    State(app_state): State<AppState>,
    axum::Extension(principal): axum::Extension<Principal>,
) -> Result<impl IntoResponse> {
    let highly_rated =
        query::restaurant::top(&app_state.read_db, Restaurant::Rating, HOME_LIMIT).await?;
    let newest =
        query::restaurant::top(&app_state.read_db, Restaurant::CreatedAt, HOME_LIMIT).await?;
    let categories = query::restaurant::categories(&app_state.read_db).await?;

    Ok(Json(json!({
        "principal": principal,
        "highly_rated_restaurants": highly_rated,
        "new_restaurants": newest,
        "categories": categories,
    })))
}

pub async fn company(State(app_state): State<AppState>) -> Result<impl IntoResponse> {
    let company = query::company::find_company(&app_state.read_db)
        .await?
        .ok_or(AppError::NotFound("company"))?;

    Ok(Json(company))
}

pub async fn terms(State(app_state): State<AppState>) -> Result<impl IntoResponse> {
    let content = query::company::find_terms(&app_state.read_db)
        .await?
        .ok_or(AppError::NotFound("terms"))?;

    Ok(Json(json!({ "content": content })))
}
