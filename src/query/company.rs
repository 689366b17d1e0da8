use nagoyameshi_db::table::{Company, Term};
use sea_query::{Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyRow {
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub representative: String,
    pub establishment_date: String,
    pub capital: String,
    pub business: String,
    pub number_of_employees: String,
}

pub async fn find_company(pool: &SqlitePool) -> anyhow::Result<Option<CompanyRow>> {
    let statement = Query::select()
        .columns([
            Company::Name,
            Company::PostalCode,
            Company::Address,
            Company::Representative,
            Company::EstablishmentDate,
            Company::Capital,
            Company::Business,
            Company::NumberOfEmployees,
        ])
        .from(Company::Table)
        .order_by(Company::Id, Order::Asc)
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CompanyRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub async fn find_terms(pool: &SqlitePool) -> anyhow::Result<Option<String>> {
    let statement = Query::select()
        .column(Term::Content)
        .from(Term::Table)
        .order_by(Term::Id, Order::Asc)
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(content,)| content))
}
