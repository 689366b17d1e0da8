use nagoyameshi_db::table::Admin;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

/// Id and password hash for the administrator registered under `email`.
pub async fn find_credentials(
    pool: &SqlitePool,
    email: &str,
) -> anyhow::Result<Option<(i64, String)>> {
    let statement = Query::select()
        .columns([Admin::Id, Admin::Password])
        .from(Admin::Table)
        .and_where(Expr::col(Admin::Email).eq(email.to_lowercase()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, (i64, String), _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}
