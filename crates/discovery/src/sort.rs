use nagoyameshi_db::table::Restaurant;
use sea_query::Order;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Closed set of sort options offered to clients.
///
/// Clients send the serialized value (e.g. `lowest_price asc`). Anything that
/// is not one of these values resolves to the default.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Display, AsRefStr, EnumString, VariantArray,
)]
pub enum SortLabel {
    #[default]
    #[strum(serialize = "created_at desc")]
    NewestFirst,
    #[strum(serialize = "created_at asc")]
    OldestFirst,
    #[strum(serialize = "lowest_price asc")]
    PriceAscending,
    #[strum(serialize = "lowest_price desc")]
    PriceDescending,
    #[strum(serialize = "rating desc")]
    RatingDescending,
    #[strum(serialize = "rating asc")]
    RatingAscending,
}

impl SortLabel {
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|v| v.trim().parse().ok()).unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            SortLabel::NewestFirst => "Newest listings",
            SortLabel::OldestFirst => "Oldest listings",
            SortLabel::PriceAscending => "Price: low to high",
            SortLabel::PriceDescending => "Price: high to low",
            SortLabel::RatingDescending => "Rating: high to low",
            SortLabel::RatingAscending => "Rating: low to high",
        }
    }

    pub fn column_order(&self) -> (Restaurant, Order) {
        match self {
            SortLabel::NewestFirst => (Restaurant::CreatedAt, Order::Desc),
            SortLabel::OldestFirst => (Restaurant::CreatedAt, Order::Asc),
            SortLabel::PriceAscending => (Restaurant::LowestPrice, Order::Asc),
            SortLabel::PriceDescending => (Restaurant::LowestPrice, Order::Desc),
            SortLabel::RatingDescending => (Restaurant::Rating, Order::Desc),
            SortLabel::RatingAscending => (Restaurant::Rating, Order::Asc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(
            SortLabel::parse(Some("lowest_price asc")),
            SortLabel::PriceAscending
        );
        assert_eq!(
            SortLabel::parse(Some("rating desc")),
            SortLabel::RatingDescending
        );
        assert_eq!(
            SortLabel::parse(Some("created_at asc")),
            SortLabel::OldestFirst
        );
    }

    #[test]
    fn unknown_or_missing_label_is_newest_first() {
        for raw in [
            None,
            Some(""),
            Some("name asc"),
            Some("lowest_price; DROP TABLE restaurant"),
            Some("rating sideways"),
        ] {
            assert_eq!(SortLabel::parse(raw), SortLabel::NewestFirst, "{raw:?}");
        }
    }

    #[test]
    fn every_label_round_trips_through_its_value() {
        for label in SortLabel::VARIANTS {
            assert_eq!(SortLabel::parse(Some(label.as_ref())), *label);
        }
    }

    #[test]
    fn default_sorts_by_creation_descending() {
        let (column, order) = SortLabel::default().column_order();
        assert!(matches!(column, Restaurant::CreatedAt));
        assert!(matches!(order, Order::Desc));
    }
}
