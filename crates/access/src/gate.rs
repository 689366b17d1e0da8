use crate::{Principal, Route, RouteRequirement};

/// Outcome of checking a principal against a route requirement.
///
/// The table below never rejects outright. Every denial carries the place
/// the actor should go instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(Route),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Entitlement gate.
///
/// | requirement              | anonymous   | free member    | subscribed member | administrator |
/// |--------------------------|-------------|----------------|-------------------|---------------|
/// | Public                   | allow       | allow          | allow             | admin-home    |
/// | MemberOnly               | login       | allow          | allow             | admin-home    |
/// | AdminOnly                | admin-login | admin-login    | admin-login       | allow         |
/// | RequiresSubscription     | login       | subscribe-page | allow             | admin-home    |
/// | RequiresNoSubscription   | login       | allow          | manage-page       | admin-home    |
pub fn check(principal: &Principal, requirement: RouteRequirement) -> Decision {
    use RouteRequirement::*;

    match (requirement, principal) {
        (AdminOnly, Principal::Administrator { .. }) => Decision::Allow,
        (AdminOnly, _) => Decision::RedirectTo(Route::AdminLogin),
        (_, Principal::Administrator { .. }) => Decision::RedirectTo(Route::AdminHome),
        (Public, _) => Decision::Allow,
        (_, Principal::Anonymous) => Decision::RedirectTo(Route::Login),
        (MemberOnly, Principal::Member { .. }) => Decision::Allow,
        (
            RequiresSubscription,
            Principal::Member {
                subscribed: true, ..
            },
        ) => Decision::Allow,
        (
            RequiresSubscription,
            Principal::Member {
                subscribed: false,
                ..
            },
        ) => Decision::RedirectTo(Route::SubscribePage),
        (
            RequiresNoSubscription,
            Principal::Member {
                subscribed: true, ..
            },
        ) => Decision::RedirectTo(Route::ManageSubscriptionPage),
        (
            RequiresNoSubscription,
            Principal::Member {
                subscribed: false,
                ..
            },
        ) => Decision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    const ANONYMOUS: Principal = Principal::Anonymous;
    const FREE: Principal = Principal::Member {
        id: 7,
        subscribed: false,
    };
    const PREMIUM: Principal = Principal::Member {
        id: 8,
        subscribed: true,
    };
    const ADMIN: Principal = Principal::Administrator { id: 1 };

    fn redirect(route: Route) -> Decision {
        Decision::RedirectTo(route)
    }

    #[test]
    fn decision_table() {
        use RouteRequirement::*;

        let table = [
            (Public, [Decision::Allow, Decision::Allow, Decision::Allow, redirect(Route::AdminHome)]),
            (
                MemberOnly,
                [redirect(Route::Login), Decision::Allow, Decision::Allow, redirect(Route::AdminHome)],
            ),
            (
                AdminOnly,
                [
                    redirect(Route::AdminLogin),
                    redirect(Route::AdminLogin),
                    redirect(Route::AdminLogin),
                    Decision::Allow,
                ],
            ),
            (
                RequiresSubscription,
                [
                    redirect(Route::Login),
                    redirect(Route::SubscribePage),
                    Decision::Allow,
                    redirect(Route::AdminHome),
                ],
            ),
            (
                RequiresNoSubscription,
                [
                    redirect(Route::Login),
                    Decision::Allow,
                    redirect(Route::ManageSubscriptionPage),
                    redirect(Route::AdminHome),
                ],
            ),
        ];

        assert_eq!(table.len(), RouteRequirement::VARIANTS.len());

        for (requirement, expected) in table {
            for (principal, want) in [ANONYMOUS, FREE, PREMIUM, ADMIN].iter().zip(expected) {
                assert_eq!(
                    check(principal, requirement),
                    want,
                    "{requirement} for {principal:?}"
                );
            }
        }
    }

    #[test]
    fn administrator_is_only_allowed_on_admin_routes() {
        for requirement in RouteRequirement::VARIANTS {
            let decision = check(&ADMIN, *requirement);
            if *requirement == RouteRequirement::AdminOnly {
                assert!(decision.is_allowed());
            } else {
                assert_eq!(decision, redirect(Route::AdminHome));
            }
        }
    }

    #[test]
    fn members_never_reach_admin_routes() {
        for principal in [ANONYMOUS, FREE, PREMIUM] {
            assert_eq!(
                check(&principal, RouteRequirement::AdminOnly),
                redirect(Route::AdminLogin)
            );
        }
    }
}
