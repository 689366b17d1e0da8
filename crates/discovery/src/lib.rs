//! Restaurant discovery: turns untrusted listing parameters into a filtered,
//! sorted and paginated page of restaurants.

mod filter;
mod page;
mod search;
mod sort;

pub use filter::{Filters, SearchParams, SearchRequest};
pub use page::{Page, parse_page};
pub use search::{Discovery, RestaurantRow, apply_filters, contains};
pub use sort::SortLabel;

pub const PAGE_SIZE: u64 = 15;
