use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post, put},
};
use nagoyameshi_access::{PrincipalResolver, RouteRequirement};
use nagoyameshi_billing::SqliteBilling;
use nagoyameshi_discovery::Discovery;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::{auth::SessionIdentity, command::Command, config::Config, gate::guarded};

mod admin;
mod auth;
mod favorites;
mod home;
mod reservations;
mod restaurants;
mod reviews;
mod subscription;
mod user;

/// `?page=` on paginated listings, parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

pub type Resolver = PrincipalResolver<SessionIdentity, SqliteBilling>;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub read_db: SqlitePool,
    pub command: Command,
    pub resolver: Resolver,
    pub discovery: Discovery,
}

impl AppState {
    pub fn new(config: Config, read_db: SqlitePool, write_db: SqlitePool) -> Self {
        let identity = SessionIdentity::new(config.jwt.clone(), read_db.clone());
        let billing = SqliteBilling::new(read_db.clone(), write_db.clone())
            .with_plan(config.billing.plan.to_owned());

        Self {
            resolver: PrincipalResolver::new(identity, billing),
            discovery: Discovery::new(read_db.clone()),
            command: Command::new(read_db.clone(), write_db),
            read_db,
            config,
        }
    }

    pub fn billing(&self) -> &SqliteBilling {
        self.resolver.subscriptions()
    }
}

pub async fn fallback() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error_message": "page not found" })),
    )
}

pub fn router(app_state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(home::page))
        .route("/company", get(home::company))
        .route("/terms", get(home::terms))
        .route("/restaurants", get(restaurants::index))
        .route("/restaurants/{id}", get(restaurants::show));

    let member_only = Router::new()
        .route("/user", get(user::index))
        .route("/user/{id}/edit", get(user::edit))
        .route("/user/{id}", put(user::update))
        .route("/restaurants/{id}/reviews", get(reviews::index));

    let requires_subscription = Router::new()
        .route("/restaurants/{id}/reviews", post(reviews::store))
        .route("/restaurants/{id}/reviews/create", get(reviews::create))
        .route("/restaurants/{id}/reviews/{review}/edit", get(reviews::edit))
        .route(
            "/restaurants/{id}/reviews/{review}",
            put(reviews::update).delete(reviews::destroy),
        )
        .route("/reservations", get(reservations::index))
        .route("/reservations/{id}", delete(reservations::destroy))
        .route(
            "/restaurants/{id}/reservations/create",
            get(reservations::create),
        )
        .route("/restaurants/{id}/reservations", post(reservations::store))
        .route("/favorites", get(favorites::index))
        .route(
            "/favorites/{restaurant_id}",
            post(favorites::store).delete(favorites::destroy),
        )
        .route("/subscription/edit", get(subscription::edit))
        .route("/subscription/cancel", get(subscription::cancel))
        .route(
            "/subscription",
            patch(subscription::update).delete(subscription::destroy),
        );

    let requires_no_subscription = Router::new()
        .route("/subscription/create", get(subscription::create))
        .route("/subscription", post(subscription::store));

    let admin_only = Router::new()
        .route("/admin/home", get(admin::home))
        .route("/admin/users", get(admin::users))
        .route("/admin/users/{id}", get(admin::user))
        .route(
            "/admin/restaurants",
            get(admin::restaurants).post(admin::store_restaurant),
        )
        .route("/admin/restaurants/create", get(admin::create_restaurant))
        .route(
            "/admin/restaurants/{id}",
            get(admin::restaurant)
                .patch(admin::update_restaurant)
                .delete(admin::destroy_restaurant),
        )
        .route("/admin/restaurants/{id}/edit", get(admin::edit_restaurant));

    let identity = Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/admin/login", post(auth::admin_login))
        .route("/admin/logout", post(auth::admin_logout));

    Router::new()
        .merge(guarded(public, &app_state, RouteRequirement::Public))
        .merge(guarded(member_only, &app_state, RouteRequirement::MemberOnly))
        .merge(guarded(
            requires_subscription,
            &app_state,
            RouteRequirement::RequiresSubscription,
        ))
        .merge(guarded(
            requires_no_subscription,
            &app_state,
            RouteRequirement::RequiresNoSubscription,
        ))
        .merge(guarded(admin_only, &app_state, RouteRequirement::AdminOnly))
        .merge(identity)
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
