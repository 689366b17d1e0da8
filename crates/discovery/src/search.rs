use nagoyameshi_db::table::{Category, CategoryRestaurant, Restaurant};
use sea_query::{
    Cond, Expr, ExprTrait, IntoColumnRef, LikeExpr, Query, SelectStatement, SqliteQueryBuilder,
};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::{Filters, PAGE_SIZE, Page, SearchRequest};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RestaurantRow {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub description: String,
    pub lowest_price: i64,
    pub highest_price: i64,
    pub postal_code: String,
    pub address: String,
    pub opening_time: String,
    pub closing_time: String,
    pub seating_capacity: i64,
    pub rating: f64,
    pub created_at: i64,
}

impl RestaurantRow {
    pub fn columns() -> [(Restaurant, Restaurant); 13] {
        [
            (Restaurant::Table, Restaurant::Id),
            (Restaurant::Table, Restaurant::Name),
            (Restaurant::Table, Restaurant::Image),
            (Restaurant::Table, Restaurant::Description),
            (Restaurant::Table, Restaurant::LowestPrice),
            (Restaurant::Table, Restaurant::HighestPrice),
            (Restaurant::Table, Restaurant::PostalCode),
            (Restaurant::Table, Restaurant::Address),
            (Restaurant::Table, Restaurant::OpeningTime),
            (Restaurant::Table, Restaurant::ClosingTime),
            (Restaurant::Table, Restaurant::SeatingCapacity),
            (Restaurant::Table, Restaurant::Rating),
            (Restaurant::Table, Restaurant::CreatedAt),
        ]
    }
}

/// Substring pattern with LIKE wildcards in the input escaped.
pub fn contains(keyword: &str) -> LikeExpr {
    let escaped = keyword
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

/// Adds the filter predicates to `statement`. Shared by the page query and
/// the count query so both always agree on what matches.
pub fn apply_filters(statement: &mut SelectStatement, filters: &Filters) {
    if let Some(keyword) = filters.keyword.as_deref() {
        let by_category_name = Query::select()
            .column((CategoryRestaurant::Table, CategoryRestaurant::RestaurantId))
            .from(CategoryRestaurant::Table)
            .inner_join(
                Category::Table,
                Expr::col((Category::Table, Category::Id))
                    .equals((CategoryRestaurant::Table, CategoryRestaurant::CategoryId)),
            )
            .and_where(Expr::col((Category::Table, Category::Name)).like(contains(keyword)))
            .to_owned();

        statement.cond_where(
            Cond::any()
                .add(Expr::col((Restaurant::Table, Restaurant::Name)).like(contains(keyword)))
                .add(Expr::col((Restaurant::Table, Restaurant::Address)).like(contains(keyword)))
                .add(
                    (Restaurant::Table, Restaurant::Id)
                        .into_column_ref()
                        .in_subquery(by_category_name),
                ),
        );
    }

    if let Some(category_id) = filters.category_id {
        let in_category = Query::select()
            .column(CategoryRestaurant::RestaurantId)
            .from(CategoryRestaurant::Table)
            .and_where(Expr::col(CategoryRestaurant::CategoryId).eq(category_id))
            .to_owned();

        statement.and_where(
            (Restaurant::Table, Restaurant::Id)
                .into_column_ref()
                .in_subquery(in_category),
        );
    }

    if let Some(price) = filters.price {
        statement.and_where(Expr::col((Restaurant::Table, Restaurant::LowestPrice)).lte(price));
    }
}

#[derive(Clone)]
pub struct Discovery {
    read_db: SqlitePool,
}

impl Discovery {
    pub fn new(read_db: SqlitePool) -> Self {
        Self { read_db }
    }

    pub async fn search(&self, request: &SearchRequest) -> anyhow::Result<Page<RestaurantRow>> {
        let total = self.count(&request.filters).await?;

        let (column, order) = request.sort.column_order();
        let mut statement = Query::select()
            .columns(RestaurantRow::columns())
            .from(Restaurant::Table)
            .to_owned();

        apply_filters(&mut statement, &request.filters);

        statement
            .order_by((Restaurant::Table, column), order.clone())
            .order_by((Restaurant::Table, Restaurant::Id), order)
            .limit(PAGE_SIZE)
            .offset(Page::<RestaurantRow>::offset(request.page, PAGE_SIZE));

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let items = sqlx::query_as_with::<_, RestaurantRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        tracing::debug!(
            total,
            page = request.page,
            sort = %request.sort,
            filtered = !request.filters.is_empty(),
            "restaurant search"
        );

        Ok(Page::new(items, total, request.page, PAGE_SIZE))
    }

    /// Number of restaurants matching `filters`, ignoring pagination.
    pub async fn count(&self, filters: &Filters) -> anyhow::Result<u64> {
        let mut statement = Query::select()
            .expr(Expr::cust("COUNT(*)"))
            .from(Restaurant::Table)
            .to_owned();

        apply_filters(&mut statement, filters);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(total.try_into()?)
    }
}
