use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::{Form, Query};
use nagoyameshi_access::Route;
use nagoyameshi_billing::SubscriptionProvider;
use nagoyameshi_discovery::parse_page;
use serde::Deserialize;
use serde_json::json;

use crate::{
    command::RestaurantInput,
    error::{AppError, Result},
    gate::{CurrentAdmin, flash},
    query::{self, stats::GlobalStats},
    routes::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub keyword: Option<String>,
    pub page: Option<String>,
}

pub async fn home(
    State(app_state): State<AppState>,
    CurrentAdmin(admin_id): CurrentAdmin,
) -> Result<impl IntoResponse> {
    let totals = query::stats::totals(&app_state.read_db).await?;
    let premium = app_state.billing().count_active().await?;

    let stats = GlobalStats::new(
        totals.users,
        premium.max(0) as u64,
        totals.restaurants,
        totals.reservations,
        app_state.config.billing.monthly_price,
    );

    tracing::debug!(admin_id, ?stats, "admin home");

    Ok(Json(stats))
}

pub async fn users(
    State(app_state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let users = query::user::list(
        &app_state.read_db,
        params.keyword.as_deref(),
        parse_page(params.page.as_deref()),
    )
    .await?;

    Ok(Json(json!({
        "keyword": params.keyword,
        "users": users,
    })))
}

pub async fn user(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let user = query::user::find(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("user"))?;

    Ok(Json(user))
}

pub async fn restaurants(
    State(app_state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let restaurants = query::restaurant::list(
        &app_state.read_db,
        params.keyword.as_deref(),
        parse_page(params.page.as_deref()),
    )
    .await?;

    Ok(Json(json!({
        "keyword": params.keyword,
        "restaurants": restaurants,
    })))
}

pub async fn restaurant(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let restaurant = query::restaurant::detail(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("restaurant"))?;

    Ok(Json(restaurant))
}

/// Choices offered by the create and edit forms.
async fn form_choices(app_state: &AppState) -> Result<serde_json::Value> {
    let categories = query::restaurant::categories(&app_state.read_db).await?;
    let regular_holidays = query::restaurant::regular_holidays(&app_state.read_db).await?;

    Ok(json!({
        "categories": categories,
        "regular_holidays": regular_holidays,
    }))
}

pub async fn create_restaurant(State(app_state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(form_choices(&app_state).await?))
}

pub async fn store_restaurant(
    State(app_state): State<AppState>,
    CurrentAdmin(admin_id): CurrentAdmin,
    Form(input): Form<RestaurantInput>,
) -> Result<Response> {
    let id = app_state.command.create_restaurant(input).await?;

    tracing::debug!(admin_id, restaurant_id = id, "admin registered restaurant");

    Ok(flash(Route::AdminRestaurants, "restaurant registered"))
}

pub async fn edit_restaurant(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let restaurant = query::restaurant::detail(&app_state.read_db, id)
        .await?
        .ok_or(AppError::NotFound("restaurant"))?;

    let mut body = form_choices(&app_state).await?;
    body["restaurant"] = json!(restaurant);

    Ok(Json(body))
}

pub async fn update_restaurant(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
    Form(input): Form<RestaurantInput>,
) -> Result<Response> {
    app_state.command.update_restaurant(id, input).await?;

    Ok(flash(Route::AdminRestaurant(id), "restaurant updated"))
}

pub async fn destroy_restaurant(
    State(app_state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    app_state.command.delete_restaurant(id).await?;

    Ok(flash(Route::AdminRestaurants, "restaurant deleted"))
}
