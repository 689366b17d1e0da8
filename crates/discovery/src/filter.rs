use serde::Deserialize;

use crate::{SortLabel, parse_page};

/// Query string as received. Every field is kept as text so that a bad value
/// never fails extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub keyword: Option<String>,
    pub category_id: Option<String>,
    pub price: Option<String>,
    pub select_sort: Option<String>,
    pub page: Option<String>,
}

/// Conjunctive restaurant filters. `None` means the filter is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub keyword: Option<String>,
    pub category_id: Option<i64>,
    pub price: Option<i64>,
}

impl Filters {
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            keyword: params
                .keyword
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_owned),
            category_id: positive(params.category_id.as_deref()),
            price: positive(params.price.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

fn positive(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v > 0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub filters: Filters,
    pub sort: SortLabel,
    pub page: u64,
}

impl From<&SearchParams> for SearchRequest {
    fn from(params: &SearchParams) -> Self {
        Self {
            filters: Filters::from_params(params),
            sort: SortLabel::parse(params.select_sort.as_deref()),
            page: parse_page(params.page.as_deref()),
        }
    }
}
