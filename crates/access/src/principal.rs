use serde::Serialize;

/// The actor behind a request.
///
/// Members and administrators live in separate identity spaces, so a single
/// tagged value is used instead of independent flags: "administrator and
/// member at once" cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Principal {
    Anonymous,
    Member { id: i64, subscribed: bool },
    Administrator { id: i64 },
}

impl Principal {
    pub fn member_id(&self) -> Option<i64> {
        match self {
            Principal::Member { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn administrator_id(&self) -> Option<i64> {
        match self {
            Principal::Administrator { id } => Some(*id),
            _ => None,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        matches!(
            self,
            Principal::Member {
                subscribed: true,
                ..
            }
        )
    }
}
