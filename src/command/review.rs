use nagoyameshi_db::table::{Restaurant, Review};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::SqlitePool;
use validator::Validate;

use super::{Command, now};
use crate::error::Result;

#[derive(Debug, Deserialize, Validate)]
pub struct ReviewInput {
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i64,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

impl Command {
    pub async fn create_review(
        &self,
        restaurant_id: i64,
        user_id: i64,
        input: ReviewInput,
    ) -> Result<i64> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(Review::Table)
            .columns([
                Review::RestaurantId,
                Review::UserId,
                Review::Score,
                Review::Content,
                Review::CreatedAt,
            ])
            .values_panic([
                restaurant_id.into(),
                user_id.into(),
                input.score.into(),
                input.content.into(),
                now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        refresh_rating(&self.write_db, restaurant_id).await?;

        tracing::info!(review_id = id, restaurant_id, user_id, "review created");

        Ok(id)
    }

    pub async fn update_review(&self, id: i64, restaurant_id: i64, input: ReviewInput) -> Result<()> {
        input.validate()?;

        let statement = Query::update()
            .table(Review::Table)
            .values([
                (Review::Score, input.score.into()),
                (Review::Content, input.content.into()),
                (Review::UpdatedAt, now().into()),
            ])
            .and_where(Expr::col(Review::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        refresh_rating(&self.write_db, restaurant_id).await?;

        tracing::info!(review_id = id, restaurant_id, "review updated");

        Ok(())
    }

    pub async fn delete_review(&self, id: i64, restaurant_id: i64) -> Result<()> {
        let statement = Query::delete()
            .from_table(Review::Table)
            .and_where(Expr::col(Review::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        refresh_rating(&self.write_db, restaurant_id).await?;

        tracing::info!(review_id = id, restaurant_id, "review deleted");

        Ok(())
    }
}

/// Recomputes the cached average score. A restaurant without reviews goes
/// back to 0.
async fn refresh_rating(pool: &SqlitePool, restaurant_id: i64) -> Result<()> {
    let statement = Query::update()
        .table(Restaurant::Table)
        .value(
            Restaurant::Rating,
            Expr::cust_with_values(
                "COALESCE((SELECT AVG(score) FROM review WHERE restaurant_id = ?), 0)",
                [restaurant_id],
            ),
        )
        .and_where(Expr::col(Restaurant::Id).eq(restaurant_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
