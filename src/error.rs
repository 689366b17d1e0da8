use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nagoyameshi_billing::BillingError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("Billing error: {0}")]
    Billing(#[from] BillingError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error_message": "The submitted data is invalid",
                    "errors": errors.field_errors()
                        .into_iter()
                        .map(|(field, errors)| {
                            let messages = errors
                                .iter()
                                .map(|e| {
                                    e.message
                                        .as_ref()
                                        .map(|m| m.to_string())
                                        .unwrap_or_else(|| e.code.to_string())
                                })
                                .collect::<Vec<_>>();
                            (field.to_string(), messages)
                        })
                        .collect::<std::collections::BTreeMap<_, _>>(),
                }),
            ),
            AppError::InvalidInput(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error_message": message }),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "error_message": "Invalid email or password" }),
            ),
            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({ "error_message": format!("{what} not found") }),
            ),
            AppError::Conflict(message) => {
                (StatusCode::CONFLICT, json!({ "error_message": message }))
            }
            AppError::Billing(BillingError::AlreadySubscribed) => (
                StatusCode::CONFLICT,
                json!({ "error_message": "You are already subscribed to the premium plan" }),
            ),
            AppError::Billing(BillingError::NotSubscribed) => (
                StatusCode::CONFLICT,
                json!({ "error_message": "You are not subscribed to the premium plan" }),
            ),
            AppError::Billing(BillingError::MissingPaymentMethod) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error_message": "A payment method is required" }),
            ),
            AppError::Billing(BillingError::Database(e)) | AppError::Database(e) => {
                tracing::error!(error = ?e, "database error");
                internal()
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "internal error");
                internal()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error_message": "An unexpected error occurred. Please try again later." }),
    )
}
