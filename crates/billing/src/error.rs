use thiserror::Error;

#[derive(Debug, Error)]
pub enum BillingError {
    #[error("Member already has an active subscription")]
    AlreadySubscribed,

    #[error("Member has no active subscription")]
    NotSubscribed,

    #[error("Payment method is required")]
    MissingPaymentMethod,

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

pub type BillingResult<T> = Result<T, BillingError>;
