use nagoyameshi_access::ReviewDepth;
use nagoyameshi_db::table::{Review, User};
use nagoyameshi_discovery::Page;
use sea_query::{Alias, Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReviewRow {
    pub id: i64,
    pub restaurant_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub score: i64,
    pub content: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

/// What a principal gets back from a restaurant's review list.
#[derive(Debug, Serialize)]
#[serde(tag = "depth", rename_all = "snake_case")]
pub enum ReviewListing {
    Full(Page<ReviewRow>),
    Preview { items: Vec<ReviewRow> },
}

impl ReviewListing {
    pub fn items(&self) -> &[ReviewRow] {
        match self {
            ReviewListing::Full(page) => &page.items,
            ReviewListing::Preview { items } => items,
        }
    }
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            (Review::Table, Review::Id),
            (Review::Table, Review::RestaurantId),
            (Review::Table, Review::UserId),
        ])
        .expr_as(Expr::col((User::Table, User::Name)), Alias::new("user_name"))
        .columns([
            (Review::Table, Review::Score),
            (Review::Table, Review::Content),
            (Review::Table, Review::CreatedAt),
            (Review::Table, Review::UpdatedAt),
        ])
        .from(Review::Table)
        .inner_join(
            User::Table,
            Expr::col((User::Table, User::Id)).equals((Review::Table, Review::UserId)),
        )
        .to_owned()
}

pub async fn find(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<ReviewRow>> {
    let statement = select()
        .and_where(Expr::col((Review::Table, Review::Id)).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, ReviewRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Reviews of one restaurant, newest first, cut to what `depth` allows.
pub async fn list(
    pool: &SqlitePool,
    restaurant_id: i64,
    depth: ReviewDepth,
    page: u64,
) -> anyhow::Result<ReviewListing> {
    let mut statement = select()
        .and_where(Expr::col((Review::Table, Review::RestaurantId)).eq(restaurant_id))
        .order_by((Review::Table, Review::CreatedAt), Order::Desc)
        .order_by((Review::Table, Review::Id), Order::Desc)
        .to_owned();

    match depth {
        ReviewDepth::Preview { limit } => {
            statement.limit(limit);

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let items = sqlx::query_as_with::<_, ReviewRow, _>(&sql, values)
                .fetch_all(pool)
                .await?;

            Ok(ReviewListing::Preview { items })
        }
        ReviewDepth::Full { page_size } => {
            let total = count(pool, restaurant_id).await?;
            statement
                .limit(page_size)
                .offset(Page::<ReviewRow>::offset(page, page_size));

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let items = sqlx::query_as_with::<_, ReviewRow, _>(&sql, values)
                .fetch_all(pool)
                .await?;

            Ok(ReviewListing::Full(Page::new(items, total, page, page_size)))
        }
    }
}

pub async fn count(pool: &SqlitePool, restaurant_id: i64) -> anyhow::Result<u64> {
    let statement = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(Review::Table)
        .and_where(Expr::col(Review::RestaurantId).eq(restaurant_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    Ok(Ord::max(total, 0) as u64)
}
