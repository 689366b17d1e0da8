use crate::{Principal, Route};

/// Message surfaced to the member when an ownership check fails.
pub const UNAUTHORIZED_ACCESS: &str = "unauthorized access";

/// A record that belongs to exactly one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnedResource {
    UserProfile { owner_id: i64 },
    Review { owner_id: i64, restaurant_id: i64 },
    Reservation { owner_id: i64 },
}

impl OwnedResource {
    pub fn owner_id(&self) -> i64 {
        match self {
            OwnedResource::UserProfile { owner_id }
            | OwnedResource::Review { owner_id, .. }
            | OwnedResource::Reservation { owner_id } => *owner_id,
        }
    }

    /// Where a refused actor is sent: the listing the resource belongs to.
    pub fn listing_route(&self) -> Route {
        match self {
            OwnedResource::UserProfile { .. } => Route::UserIndex,
            OwnedResource::Review { restaurant_id, .. } => Route::RestaurantReviews(*restaurant_id),
            OwnedResource::Reservation { .. } => Route::ReservationsIndex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Allow,
    Deny(Route),
}

/// Only the owning member may act. Runs after the gate, so a non-member here
/// is treated as a plain denial rather than a login redirect.
pub fn check_ownership(principal: &Principal, resource: &OwnedResource) -> Ownership {
    match principal.member_id() {
        Some(id) if id == resource.owner_id() => Ownership::Allow,
        _ => Ownership::Deny(resource.listing_route()),
    }
}
