//! Request-scoped authorization core.
//!
//! Every controller asks three questions in order: who is acting
//! ([`PrincipalResolver`]), may this kind of actor use the route at all
//! ([`gate::check`]) and, for writes on personally owned records, is the actor
//! the owner ([`ownership::check_ownership`]). All answers are plain values;
//! performing the redirect is left to the transport.

pub mod gate;
pub mod ownership;
mod principal;
mod requirement;
mod resolver;
mod route;
pub mod visibility;

pub use gate::Decision;
pub use ownership::{OwnedResource, Ownership, UNAUTHORIZED_ACCESS};
pub use principal::Principal;
pub use requirement::RouteRequirement;
pub use resolver::{Credentials, IdentityStore, PrincipalResolver, SubscriptionStatus};
pub use route::Route;
pub use visibility::ReviewDepth;
