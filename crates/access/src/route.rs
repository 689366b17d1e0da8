use std::fmt::Display;

/// Symbolic redirect target. Turning these into concrete URLs is up to the
/// HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    AdminLogin,
    AdminHome,
    SubscribePage,
    ManageSubscriptionPage,
    UserIndex,
    RestaurantReviews(i64),
    ReservationsIndex,
    AdminRestaurants,
    AdminRestaurant(i64),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Login => "login",
            Route::AdminLogin => "admin-login",
            Route::AdminHome => "admin-home",
            Route::SubscribePage => "subscribe-page",
            Route::ManageSubscriptionPage => "manage-subscription-page",
            Route::UserIndex => "user-index",
            Route::RestaurantReviews(_) => "restaurant-reviews",
            Route::ReservationsIndex => "reservations-index",
            Route::AdminRestaurants => "admin-restaurants",
            Route::AdminRestaurant(_) => "admin-restaurant",
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::RestaurantReviews(id) | Route::AdminRestaurant(id) => {
                write!(f, "{}({id})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
