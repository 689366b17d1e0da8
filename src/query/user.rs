use nagoyameshi_db::table::User;
use nagoyameshi_discovery::{Page, contains};
use sea_query::{Cond, Expr, ExprTrait, Order, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

pub const PAGE_SIZE: u64 = 15;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub kana: String,
    pub email: String,
    pub postal_code: String,
    pub address: String,
    pub phone_number: String,
    pub birthday: Option<String>,
    pub occupation: Option<String>,
    pub created_at: i64,
    pub updated_at: Option<i64>,
}

fn select() -> SelectStatement {
    Query::select()
        .columns([
            User::Id,
            User::Name,
            User::Kana,
            User::Email,
            User::PostalCode,
            User::Address,
            User::PhoneNumber,
            User::Birthday,
            User::Occupation,
            User::CreatedAt,
            User::UpdatedAt,
        ])
        .from(User::Table)
        .to_owned()
}

pub async fn find(pool: &SqlitePool, id: i64) -> anyhow::Result<Option<UserRow>> {
    let statement = select().and_where(Expr::col(User::Id).eq(id)).limit(1).to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Id and password hash for the member registered under `email`.
pub async fn find_credentials(
    pool: &SqlitePool,
    email: &str,
) -> anyhow::Result<Option<(i64, String)>> {
    let statement = Query::select()
        .columns([User::Id, User::Password])
        .from(User::Table)
        .and_where(Expr::col(User::Email).eq(email.to_lowercase()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, (i64, String), _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Whether another member already uses `email`. `except` excludes the
/// member's own row when they keep their address on a profile update.
pub async fn email_taken(
    pool: &SqlitePool,
    email: &str,
    except: Option<i64>,
) -> anyhow::Result<bool> {
    let mut statement = Query::select()
        .column(User::Id)
        .from(User::Table)
        .and_where(Expr::col(User::Email).eq(email.to_lowercase()))
        .limit(1)
        .to_owned();

    if let Some(id) = except {
        statement.and_where(Expr::col(User::Id).ne(id));
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Member list for administrators, optionally narrowed by a keyword matched
/// against name, kana and email.
pub async fn list(
    pool: &SqlitePool,
    keyword: Option<&str>,
    page: u64,
) -> anyhow::Result<Page<UserRow>> {
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
    let condition = keyword.map(|keyword| {
        Cond::any()
            .add(Expr::col(User::Name).like(contains(keyword)))
            .add(Expr::col(User::Kana).like(contains(keyword)))
            .add(Expr::col(User::Email).like(contains(keyword)))
    });

    let mut count = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(User::Table)
        .to_owned();

    if let Some(condition) = condition.clone() {
        count.cond_where(condition);
    }

    let (sql, values) = count.build_sqlx(SqliteQueryBuilder);
    let (total,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    let mut statement = select()
        .order_by(User::Id, Order::Asc)
        .limit(PAGE_SIZE)
        .offset(Page::<UserRow>::offset(page, PAGE_SIZE))
        .to_owned();

    if let Some(condition) = condition {
        statement.cond_where(condition);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let items = sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(Page::new(items, Ord::max(total, 0) as u64, page, PAGE_SIZE))
}
