use nagoyameshi_db::table::{Favorite, Restaurant};
use nagoyameshi_discovery::{Page, RestaurantRow};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

pub const PAGE_SIZE: u64 = 15;

/// Restaurants a member marked as favorite, most recently marked first.
pub async fn list_by_user(
    pool: &SqlitePool,
    user_id: i64,
    page: u64,
) -> anyhow::Result<Page<RestaurantRow>> {
    let statement = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(Favorite::Table)
        .and_where(Expr::col(Favorite::UserId).eq(user_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    let statement = Query::select()
        .columns(RestaurantRow::columns())
        .from(Favorite::Table)
        .inner_join(
            Restaurant::Table,
            Expr::col((Restaurant::Table, Restaurant::Id))
                .equals((Favorite::Table, Favorite::RestaurantId)),
        )
        .and_where(Expr::col((Favorite::Table, Favorite::UserId)).eq(user_id))
        .order_by((Favorite::Table, Favorite::CreatedAt), Order::Desc)
        .order_by((Favorite::Table, Favorite::RestaurantId), Order::Desc)
        .limit(PAGE_SIZE)
        .offset(Page::<RestaurantRow>::offset(page, PAGE_SIZE))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let items = sqlx::query_as_with::<_, RestaurantRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(Page::new(items, Ord::max(total, 0) as u64, page, PAGE_SIZE))
}

pub async fn is_favorite(pool: &SqlitePool, user_id: i64, restaurant_id: i64) -> anyhow::Result<bool> {
    let statement = Query::select()
        .column(Favorite::RestaurantId)
        .from(Favorite::Table)
        .and_where(Expr::col(Favorite::UserId).eq(user_id))
        .and_where(Expr::col(Favorite::RestaurantId).eq(restaurant_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}
