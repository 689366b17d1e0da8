use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use nagoyameshi_access::Route;
use nagoyameshi_billing::{Subscription, SubscriptionProvider};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::Result,
    gate::{CurrentMember, flash},
    routes::AppState,
};

#[derive(Deserialize)]
pub struct PaymentMethodForm {
    pub payment_method: String,
}

fn to_json(subscription: &Subscription) -> Value {
    json!({
        "name": subscription.name,
        "status": subscription.status.0,
        "payment_method": subscription.payment_method,
        "created_at": subscription.created_at,
        "ends_at": subscription.ends_at,
    })
}

pub async fn create(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "plan": app_state.billing().plan(),
        "monthly_price": app_state.config.billing.monthly_price,
    }))
}

pub async fn store(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
    Form(form): Form<PaymentMethodForm>,
) -> Result<Response> {
    app_state
        .billing()
        .create(member_id, form.payment_method.trim())
        .await?;

    Ok(flash(Route::Home, "subscribed to the premium plan"))
}

pub async fn edit(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
) -> Result<impl IntoResponse> {
    let subscription = app_state.billing().current(member_id).await?;

    Ok(Json(json!({
        "subscription": subscription.as_ref().map(to_json),
    })))
}

pub async fn update(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
    Form(form): Form<PaymentMethodForm>,
) -> Result<Response> {
    app_state
        .billing()
        .update_payment_method(member_id, form.payment_method.trim())
        .await?;

    Ok(flash(Route::Home, "payment method updated"))
}

pub async fn cancel(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
) -> Result<impl IntoResponse> {
    let subscription = app_state.billing().current(member_id).await?;

    Ok(Json(json!({
        "subscription": subscription.as_ref().map(to_json),
    })))
}

pub async fn destroy(
    State(app_state): State<AppState>,
    CurrentMember(member_id): CurrentMember,
) -> Result<Response> {
    app_state.billing().cancel(member_id).await?;

    Ok(flash(Route::Home, "premium plan canceled"))
}
