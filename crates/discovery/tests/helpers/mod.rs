use std::{path::PathBuf, str::FromStr};

use nagoyameshi_db::table::{Category, CategoryRestaurant, Restaurant};
use nagoyameshi_discovery::Discovery;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct TestState {
    pub pool: SqlitePool,
    pub discovery: Discovery,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    nagoyameshi_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(TestState {
        discovery: Discovery::new(pool.clone()),
        pool,
    })
}

pub struct NewRestaurant<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub lowest_price: i64,
    pub rating: f64,
    pub created_at: i64,
}

impl Default for NewRestaurant<'_> {
    fn default() -> Self {
        Self {
            name: "Restaurant",
            address: "Nagoya, Naka-ku",
            lowest_price: 1000,
            rating: 0.0,
            created_at: 0,
        }
    }
}

pub async fn create_restaurant(state: &TestState, input: NewRestaurant<'_>) -> anyhow::Result<i64> {
    let statement = Query::insert()
        .into_table(Restaurant::Table)
        .columns([
            Restaurant::Name,
            Restaurant::LowestPrice,
            Restaurant::HighestPrice,
            Restaurant::PostalCode,
            Restaurant::Address,
            Restaurant::OpeningTime,
            Restaurant::ClosingTime,
            Restaurant::Rating,
            Restaurant::CreatedAt,
        ])
        .values_panic([
            input.name.into(),
            input.lowest_price.into(),
            (input.lowest_price * 2).into(),
            "4600008".into(),
            input.address.into(),
            "11:00".into(),
            "22:00".into(),
            input.rating.into(),
            input.created_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let id = sqlx::query_with(&sql, values)
        .execute(&state.pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}

pub async fn create_category(
    state: &TestState,
    name: &str,
    restaurants: &[i64],
) -> anyhow::Result<i64> {
    let statement = Query::insert()
        .into_table(Category::Table)
        .columns([Category::Name, Category::CreatedAt])
        .values_panic([name.into(), 0i64.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let id = sqlx::query_with(&sql, values)
        .execute(&state.pool)
        .await?
        .last_insert_rowid();

    for restaurant_id in restaurants {
        let statement = Query::insert()
            .into_table(CategoryRestaurant::Table)
            .columns([CategoryRestaurant::CategoryId, CategoryRestaurant::RestaurantId])
            .values_panic([id.into(), (*restaurant_id).into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&state.pool).await?;
    }

    Ok(id)
}
