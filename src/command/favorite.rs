use nagoyameshi_db::table::Favorite;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use super::{Command, now};
use crate::error::Result;

impl Command {
    /// Marking an already favorite restaurant is a no-op.
    pub async fn add_favorite(&self, user_id: i64, restaurant_id: i64) -> Result<()> {
        let statement = Query::insert()
            .into_table(Favorite::Table)
            .columns([Favorite::UserId, Favorite::RestaurantId, Favorite::CreatedAt])
            .values_panic([user_id.into(), restaurant_id.into(), now().into()])
            .on_conflict(
                OnConflict::columns([Favorite::UserId, Favorite::RestaurantId])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(user_id, restaurant_id, "favorite added");

        Ok(())
    }

    pub async fn remove_favorite(&self, user_id: i64, restaurant_id: i64) -> Result<()> {
        let statement = Query::delete()
            .from_table(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(user_id))
            .and_where(Expr::col(Favorite::RestaurantId).eq(restaurant_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(user_id, restaurant_id, "favorite removed");

        Ok(())
    }
}
