use std::{path::PathBuf, str::FromStr};

use nagoyameshi_billing::SqliteBilling;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct TestState {
    pub pool: SqlitePool,
    pub billing: SqliteBilling,
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
        billing: SqliteBilling::new(pool.clone(), pool.clone()),
        pool,
    })
}

pub async fn create_member(state: &TestState, name: &str) -> anyhow::Result<i64> {
    use nagoyameshi_db::table::User;

    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Name,
            User::Kana,
            User::Email,
            User::Password,
            User::PostalCode,
            User::Address,
            User::PhoneNumber,
            User::CreatedAt,
        ])
        .values_panic([
            name.into(),
            name.into(),
            format!("{name}@nagoyameshi.localhost").into(),
            "not-a-hash".into(),
            "4600001".into(),
            "Nagoya".into(),
            "0520000000".into(),
            0i64.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let id = sqlx::query_with(&sql, values)
        .execute(&state.pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}
