use async_trait::async_trait;

use crate::Principal;

/// Raw session tokens presented with a request, one per identity space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub member: Option<String>,
    pub administrator: Option<String>,
}

/// Maps session credentials to identities.
///
/// Implementations return `Ok(None)` for a missing or invalid credential.
/// `Err` is reserved for infrastructure failures.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn current_administrator(&self, credentials: &Credentials) -> anyhow::Result<Option<i64>>;

    async fn current_member(&self, credentials: &Credentials) -> anyhow::Result<Option<i64>>;
}

/// Answers whether a member currently holds an active premium subscription.
#[async_trait]
pub trait SubscriptionStatus: Send + Sync {
    async fn is_active(&self, member_id: i64) -> anyhow::Result<bool>;
}

#[derive(Clone)]
pub struct PrincipalResolver<I, S> {
    identity: I,
    subscriptions: S,
}

impl<I: IdentityStore, S: SubscriptionStatus> PrincipalResolver<I, S> {
    pub fn new(identity: I, subscriptions: S) -> Self {
        Self {
            identity,
            subscriptions,
        }
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    pub fn subscriptions(&self) -> &S {
        &self.subscriptions
    }

    /// Resolves exactly one principal. The administrator credential is
    /// examined first; the subscription flag is only looked up for members.
    pub async fn resolve(&self, credentials: &Credentials) -> anyhow::Result<Principal> {
        if let Some(id) = self.identity.current_administrator(credentials).await? {
            tracing::debug!(id, "resolved administrator");
            return Ok(Principal::Administrator { id });
        }

        let Some(id) = self.identity.current_member(credentials).await? else {
            return Ok(Principal::Anonymous);
        };

        let subscribed = self.subscriptions.is_active(id).await?;
        tracing::debug!(id, subscribed, "resolved member");

        Ok(Principal::Member { id, subscribed })
    }
}
