use nagoyameshi_db::table::{
    Category, CategoryRestaurant, RegularHoliday, RegularHolidayRestaurant, Restaurant,
};
use nagoyameshi_discovery::{PAGE_SIZE, Page, RestaurantRow, contains};
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HolidayRow {
    pub id: i64,
    pub day: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RestaurantDetail {
    #[serde(flatten)]
    pub restaurant: RestaurantRow,
    pub categories: Vec<CategoryRow>,
    pub regular_holidays: Vec<HolidayRow>,
}

pub async fn find(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<RestaurantRow>> {
    let statement = Query::select()
        .columns(RestaurantRow::columns())
        .from(Restaurant::Table)
        .and_where(Expr::col((Restaurant::Table, Restaurant::Id)).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RestaurantRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub async fn detail(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<RestaurantDetail>> {
    let Some(restaurant) = find(pool, id).await? else {
        return Ok(None);
    };

    let statement = Query::select()
        .columns([(Category::Table, Category::Id), (Category::Table, Category::Name)])
        .from(Category::Table)
        .inner_join(
            CategoryRestaurant::Table,
            Expr::col((CategoryRestaurant::Table, CategoryRestaurant::CategoryId))
                .equals((Category::Table, Category::Id)),
        )
        .and_where(Expr::col((CategoryRestaurant::Table, CategoryRestaurant::RestaurantId)).eq(id))
        .order_by((Category::Table, Category::Id), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let categories = sqlx::query_as_with::<_, CategoryRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    let statement = Query::select()
        .columns([
            (RegularHoliday::Table, RegularHoliday::Id),
            (RegularHoliday::Table, RegularHoliday::Day),
        ])
        .from(RegularHoliday::Table)
        .inner_join(
            RegularHolidayRestaurant::Table,
            Expr::col((
                RegularHolidayRestaurant::Table,
                RegularHolidayRestaurant::RegularHolidayId,
            ))
            .equals((RegularHoliday::Table, RegularHoliday::Id)),
        )
        .and_where(
            Expr::col((
                RegularHolidayRestaurant::Table,
                RegularHolidayRestaurant::RestaurantId,
            ))
            .eq(id),
        )
        .order_by((RegularHoliday::Table, RegularHoliday::DayIndex), Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let regular_holidays = sqlx::query_as_with::<_, HolidayRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(Some(RestaurantDetail {
        restaurant,
        categories,
        regular_holidays,
    }))
}

/// Top `limit` restaurants by `column` descending, used on the home page.
pub async fn top(
    pool: &SqlitePool,
    column: Restaurant,
    limit: u64,
) -> anyhow::Result<Vec<RestaurantRow>> {
    let statement = Query::select()
        .columns(RestaurantRow::columns())
        .from(Restaurant::Table)
        .order_by((Restaurant::Table, column), Order::Desc)
        .order_by((Restaurant::Table, Restaurant::Id), Order::Desc)
        .limit(limit)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RestaurantRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub async fn categories(pool: &SqlitePool) -> anyhow::Result<Vec<CategoryRow>> {
    let statement = Query::select()
        .columns([Category::Id, Category::Name])
        .from(Category::Table)
        .order_by(Category::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CategoryRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

pub async fn regular_holidays(pool: &SqlitePool) -> anyhow::Result<Vec<HolidayRow>> {
    let statement = Query::select()
        .columns([RegularHoliday::Id, RegularHoliday::Day])
        .from(RegularHoliday::Table)
        .order_by(RegularHoliday::DayIndex, Order::Asc)
        .order_by(RegularHoliday::Id, Order::Asc)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, HolidayRow, _>(&sql, values)
        .fetch_all(pool)
        .await?)
}

/// Restaurant list for administrators, optionally narrowed by name.
pub async fn list(
    pool: &SqlitePool,
    keyword: Option<&str>,
    page: u64,
) -> anyhow::Result<Page<RestaurantRow>> {
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());

    let mut count = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(Restaurant::Table)
        .to_owned();
    let mut statement = Query::select()
        .columns(RestaurantRow::columns())
        .from(Restaurant::Table)
        .order_by((Restaurant::Table, Restaurant::Id), Order::Asc)
        .limit(PAGE_SIZE)
        .offset(Page::<RestaurantRow>::offset(page, PAGE_SIZE))
        .to_owned();

    if let Some(keyword) = keyword {
        count.and_where(Expr::col(Restaurant::Name).like(contains(keyword)));
        statement.and_where(Expr::col((Restaurant::Table, Restaurant::Name)).like(contains(keyword)));
    }

    let (sql, values) = count.build_sqlx(SqliteQueryBuilder);
    let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let items = sqlx::query_as_with::<_, RestaurantRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(Page::new(items, Ord::max(total, 0) as u64, page, PAGE_SIZE))
}
