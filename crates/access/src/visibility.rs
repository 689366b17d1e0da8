use crate::Principal;

pub const FULL_PAGE_SIZE: u64 = 5;
pub const PREVIEW_LIMIT: u64 = 3;

/// How much of a restaurant's review list a principal may read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDepth {
    /// Paginated, newest first.
    Full { page_size: u64 },
    /// Newest reviews only, no pagination.
    Preview { limit: u64 },
}

impl ReviewDepth {
    pub fn for_principal(principal: &Principal) -> Self {
        if principal.is_subscribed() {
            ReviewDepth::Full {
                page_size: FULL_PAGE_SIZE,
            }
        } else {
            ReviewDepth::Preview {
                limit: PREVIEW_LIMIT,
            }
        }
    }
}
