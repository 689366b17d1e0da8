use nagoyameshi_db::table::{Reservation, Restaurant, User};
use sea_query::{Expr, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct GlobalStats {
    pub total_users: u64,
    pub total_premium_users: u64,
    pub total_free_users: u64,
    pub total_restaurants: u64,
    pub total_reservations: u64,
    pub sales_for_this_month: u64,
}

impl GlobalStats {
    /// Free members are whoever is not premium; sales are one monthly fee per
    /// premium member.
    pub fn new(
        users: u64,
        premium: u64,
        restaurants: u64,
        reservations: u64,
        monthly_price: u64,
    ) -> Self {
        Self {
            total_users: users,
            total_premium_users: premium,
            total_free_users: users.saturating_sub(premium),
            total_restaurants: restaurants,
            total_reservations: reservations,
            sales_for_this_month: premium.saturating_mul(monthly_price),
        }
    }
}

async fn count_rows<T>(pool: &SqlitePool, table: T) -> anyhow::Result<u64>
where
    T: sea_query::IntoTableRef,
{
    let statement = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(table)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    Ok(total.max(0) as u64)
}

pub struct Totals {
    pub users: u64,
    pub restaurants: u64,
    pub reservations: u64,
}

pub async fn totals(pool: &SqlitePool) -> anyhow::Result<Totals> {
    Ok(Totals {
        users: count_rows(pool, User::Table).await?,
        restaurants: count_rows(pool, Restaurant::Table).await?,
        reservations: count_rows(pool, Reservation::Table).await?,
    })
}
