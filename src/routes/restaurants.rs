use axum::{
    Extension, Json,
    extract::{Path, State},
    response::IntoResponse,
};
use axum_extra::extract::Query;
use nagoyameshi_access::Principal;
use nagoyameshi_discovery::{SearchParams, SearchRequest, SortLabel};
use serde_json::json;
use strum::VariantArray;

use crate::{
    error::{AppError, Result},
    query,
    routes::AppState,
};

/// Discovery listing. Malformed parameters are ignored rather than rejected.
pub async fn index(
    State(app_state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse> {
    let request = SearchRequest::from(&params);
    let restaurants = app_state.discovery.search(&request).await?;
    let categories = query::restaurant::categories(&app_state.read_db).await?;

    tracing::debug!(
        filters = ?request.filters,
        sort = %request.sort,
        page = request.page,
        total = restaurants.total,
        "restaurant search"
    );

    Ok(Json(json!({
        "keyword": request.filters.keyword,
        "category_id": request.filters.category_id,
        "price": request.filters.price,
        "select_sort": request.sort.to_string(),
        "sorts": SortLabel::VARIANTS
            .iter()
            .map(|sort| json!({ "value": sort.to_string(), "title": sort.title() }))
            .collect::<Vec<_>>(),
        "categories": categories,
        "restaurants": restaurants,
    })))
}

pub async fn show(
    State(app_state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let restaurant = query::restaurant::detail(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("restaurant"))?;

    let favorite = match principal.member_id() {
        Some(member_id) => query::favorite::is_favorite(&app_state.read_db, member_id, id).await?,
        None => false,
    };

    Ok(Json(json!({
        "restaurant": restaurant,
        "favorite": favorite,
    })))
}
