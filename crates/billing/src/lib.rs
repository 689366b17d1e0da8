//! Premium plan subscriptions.
//!
//! The rest of the system only talks to [`SubscriptionProvider`]. The bundled
//! [`SqliteBilling`] keeps the subscription ledger in the application
//! database, where a hosted payment provider would otherwise sit.

mod error;
mod provider;
mod sqlite;

pub use error::{BillingError, BillingResult};
pub use provider::{Subscription, SubscriptionProvider, SubscriptionState};
pub use sqlite::SqliteBilling;

/// Name of the single paid plan.
pub const PREMIUM_PLAN: &str = "premium_plan";
