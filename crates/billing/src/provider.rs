use async_trait::async_trait;
use nagoyameshi_access::SubscriptionStatus;
use serde::Serialize;
use sqlx::prelude::FromRow;
use strum::{AsRefStr, Display, EnumString};

use crate::BillingResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    Active,
    Canceled,
}

#[derive(Debug, Clone, FromRow)]
pub struct Subscription {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub status: sqlx::types::Text<SubscriptionState>,
    pub payment_method: String,
    pub created_at: i64,
    pub ends_at: Option<i64>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status.0 == SubscriptionState::Active
    }
}

/// Subscription lifecycle for the premium plan.
///
/// `is_active` (from [`SubscriptionStatus`]) is authoritative and reflects
/// every write made through this trait immediately.
#[async_trait]
pub trait SubscriptionProvider: SubscriptionStatus {
    async fn current(&self, member_id: i64) -> BillingResult<Option<Subscription>>;

    async fn create(&self, member_id: i64, payment_method: &str) -> BillingResult<Subscription>;

    async fn update_payment_method(&self, member_id: i64, payment_method: &str)
    -> BillingResult<()>;

    /// Ends the subscription now, not at the end of the billing period.
    async fn cancel(&self, member_id: i64) -> BillingResult<()>;

    async fn count_active(&self) -> BillingResult<i64>;
}
