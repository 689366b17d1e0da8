use serde::Serialize;

const MAX_OFFSET: u64 = i64::MAX as u64;

/// One page of a larger result set. `page` is 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub last_page: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u64, per_page: u64) -> Self {
        let last_page = total.div_ceil(per_page.max(1)).max(1);

        Self {
            items,
            total,
            page,
            per_page,
            last_page,
        }
    }

    /// Row offset of `page`, capped at the largest value SQLite accepts so a
    /// page past the end reads as empty.
    pub fn offset(page: u64, per_page: u64) -> u64 {
        page.saturating_sub(1)
            .saturating_mul(per_page)
            .min(MAX_OFFSET)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}

/// Parses a 1-based page number. Anything unusable means the first page.
pub fn parse_page(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|p| *p > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_page_is_at_least_one() {
        let page: Page<()> = Page::new(vec![], 0, 1, 15);
        assert_eq!(page.last_page, 1);

        let page: Page<()> = Page::new(vec![], 31, 1, 15);
        assert_eq!(page.last_page, 3);

        let page: Page<()> = Page::new(vec![], 30, 1, 15);
        assert_eq!(page.last_page, 2);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(Page::<()>::offset(1, 15), 0);
        assert_eq!(Page::<()>::offset(3, 15), 30);
        assert_eq!(Page::<()>::offset(0, 15), 0);
    }

    #[test]
    fn offset_fits_in_a_signed_integer() {
        assert_eq!(Page::<()>::offset(u64::MAX, 15), i64::MAX as u64);
        assert_eq!(Page::<()>::offset(u64::MAX / 15, 15), i64::MAX as u64);
        assert_eq!(parse_page(Some("18446744073709551615")), u64::MAX);
    }

    #[test]
    fn bad_page_numbers_fall_back_to_first() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("0")), 1);
        assert_eq!(parse_page(Some("-2")), 1);
        assert_eq!(parse_page(Some("two")), 1);
        assert_eq!(parse_page(Some("4")), 4);
    }
}
