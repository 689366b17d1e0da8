use nagoyameshi_db::table::{Reservation, Restaurant};
use nagoyameshi_discovery::Page;
use sea_query::{Alias, Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

pub const PAGE_SIZE: u64 = 15;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReservationRow {
    pub id: i64,
    pub restaurant_id: i64,
    pub restaurant_name: String,
    pub user_id: i64,
    pub reserved_datetime: i64,
    pub number_of_people: i64,
    pub created_at: i64,
}

impl ReservationRow {
    /// `YYYY-MM-DD HH:MM` in UTC, empty when the timestamp is out of range.
    pub fn reserved_at(&self) -> String {
        let Ok(reserved) = time::UtcDateTime::from_unix_timestamp(self.reserved_datetime) else {
            return "".to_owned();
        };

        let Ok(format) = time::format_description::parse("[year]-[month]-[day] [hour]:[minute]")
        else {
            return "".to_owned();
        };

        reserved.format(&format).unwrap_or_default()
    }
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            (Reservation::Table, Reservation::Id),
            (Reservation::Table, Reservation::RestaurantId),
        ])
        .expr_as(
            Expr::col((Restaurant::Table, Restaurant::Name)),
            Alias::new("restaurant_name"),
        )
        .columns([
            (Reservation::Table, Reservation::UserId),
            (Reservation::Table, Reservation::ReservedDatetime),
            (Reservation::Table, Reservation::NumberOfPeople),
            (Reservation::Table, Reservation::CreatedAt),
        ])
        .from(Reservation::Table)
        .inner_join(
            Restaurant::Table,
            Expr::col((Restaurant::Table, Restaurant::Id))
                .equals((Reservation::Table, Reservation::RestaurantId)),
        )
        .to_owned()
}

pub async fn find(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<ReservationRow>> {
    let statement = select()
        .and_where(Expr::col((Reservation::Table, Reservation::Id)).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ReservationRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// A member's reservations, latest reservation time first.
pub async fn list_by_user(
    pool: &SqlitePool,
    user_id: i64,
    page: u64,
) -> anyhow::Result<Page<ReservationRow>> {
    let statement = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(Reservation::Table)
        .and_where(Expr::col(Reservation::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    let statement = select()
        .and_where(Expr::col((Reservation::Table, Reservation::UserId)).eq(user_id))
        .order_by(
            (Reservation::Table, Reservation::ReservedDatetime),
            Order::Desc,
        )
        .order_by((Reservation::Table, Reservation::Id), Order::Desc)
        .limit(PAGE_SIZE)
        .offset(Page::<ReservationRow>::offset(page, PAGE_SIZE))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let items = sqlx::query_as_with::<_, ReservationRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(Page::new(items, Ord::max(total, 0) as u64, page, PAGE_SIZE))
}
