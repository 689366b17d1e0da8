//! HTTP side of the entitlement gate: resolves the principal for every gated
//! request, applies the route's requirement and turns symbolic redirect
//! targets into paths.

use axum::{
    Json, Router,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header, request::Parts},
    middleware::{Next, from_fn_with_state},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use nagoyameshi_access::{Decision, Principal, Route, RouteRequirement};
use serde_json::json;

use crate::{AppState, auth, error::AppError};

pub fn path(route: Route) -> String {
    match route {
        Route::Home => "/".to_owned(),
        Route::Login => "/login".to_owned(),
        Route::AdminLogin => "/admin/login".to_owned(),
        Route::AdminHome => "/admin/home".to_owned(),
        Route::SubscribePage => "/subscription/create".to_owned(),
        Route::ManageSubscriptionPage => "/subscription/edit".to_owned(),
        Route::UserIndex => "/user".to_owned(),
        Route::RestaurantReviews(id) => format!("/restaurants/{id}/reviews"),
        Route::ReservationsIndex => "/reservations".to_owned(),
        Route::AdminRestaurants => "/admin/restaurants".to_owned(),
        Route::AdminRestaurant(id) => format!("/admin/restaurants/{id}"),
    }
}

pub fn redirect(route: Route) -> Redirect {
    Redirect::to(&path(route))
}

/// One-shot message carried with a redirect.
pub enum Notice {
    Flash(String),
    Error(String),
}

/// 303 to `route` with the notice in a JSON body.
pub fn redirect_with(route: Route, notice: Notice) -> Response {
    let body = match notice {
        Notice::Flash(message) => json!({ "flash_message": message }),
        Notice::Error(message) => json!({ "error_message": message }),
    };

    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, path(route))],
        Json(body),
    )
        .into_response()
}

pub fn flash(route: Route, message: impl Into<String>) -> Response {
    redirect_with(route, Notice::Flash(message.into()))
}

#[derive(Clone)]
pub struct Gate {
    state: AppState,
    requirement: RouteRequirement,
}

async fn gate(
    State(gate): State<Gate>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = auth::credentials(&jar);
    let principal = gate.state.resolver.resolve(&credentials).await?;

    match nagoyameshi_access::gate::check(&principal, gate.requirement) {
        Decision::Allow => {
            request.extensions_mut().insert(principal);
            Ok(next.run(request).await)
        }
        Decision::RedirectTo(route) => {
            tracing::debug!(
                requirement = %gate.requirement,
                principal = ?principal,
                target = %route,
                uri = %request.uri(),
                "gate redirect"
            );
            Ok(redirect(route).into_response())
        }
    }
}

/// Puts every route of `router` behind `requirement`.
pub fn guarded(
    router: Router<AppState>,
    state: &AppState,
    requirement: RouteRequirement,
) -> Router<AppState> {
    router.route_layer(from_fn_with_state(
        Gate {
            state: state.clone(),
            requirement,
        },
        gate,
    ))
}

/// Id of the member the gate let through.
pub struct CurrentMember(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for CurrentMember {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .and_then(Principal::member_id)
            .map(CurrentMember)
            .ok_or_else(|| redirect(Route::Login))
    }
}

/// Id of the administrator the gate let through.
pub struct CurrentAdmin(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for CurrentAdmin {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .and_then(Principal::administrator_id)
            .map(CurrentAdmin)
            .ok_or_else(|| redirect(Route::AdminLogin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbolic_targets_map_to_paths() {
        assert_eq!(path(Route::Login), "/login");
        assert_eq!(path(Route::AdminLogin), "/admin/login");
        assert_eq!(path(Route::SubscribePage), "/subscription/create");
        assert_eq!(path(Route::ManageSubscriptionPage), "/subscription/edit");
        assert_eq!(path(Route::AdminHome), "/admin/home");
        assert_eq!(path(Route::UserIndex), "/user");
        assert_eq!(path(Route::RestaurantReviews(9)), "/restaurants/9/reviews");
        assert_eq!(path(Route::ReservationsIndex), "/reservations");
        assert_eq!(path(Route::AdminRestaurants), "/admin/restaurants");
        assert_eq!(path(Route::AdminRestaurant(4)), "/admin/restaurants/4");
    }
}
