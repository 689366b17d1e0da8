mod admin;
mod category;
mod company;
mod favorite;
mod regular_holiday;
mod reservation;
mod restaurant;
mod review;
mod subscription;
mod term;
mod user;

use sqlx_migrator::vec_box;

/// Implements `sqlx_migrator::Operation` for a unit struct from a pair of
/// statement builders rendered with the SQLite backend.
macro_rules! sea_operation {
    ($name:ident, $up:ident, $down:ident) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down().to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

pub(crate) use sea_operation;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "nagoyameshi",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        admin::CreateTable,
        admin::CreateUk1,
        restaurant::CreateTable,
        restaurant::CreateIdx1,
        restaurant::CreateIdx2,
        category::CreateTable,
        category::CreateJoinTable,
        category::CreateIdx1,
        regular_holiday::CreateTable,
        regular_holiday::CreateJoinTable,
        review::CreateTable,
        review::CreateIdx1,
        reservation::CreateTable,
        reservation::CreateIdx1,
        favorite::CreateTable,
        favorite::CreateIdx1,
        subscription::CreateTable,
        subscription::CreateUk1,
        company::CreateTable,
        term::CreateTable
    ]
);
