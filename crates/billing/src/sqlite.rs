use async_trait::async_trait;
use nagoyameshi_access::SubscriptionStatus;
use nagoyameshi_db::table;
use sea_query::{Expr, ExprTrait, Query, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

use crate::{
    BillingError, BillingResult, PREMIUM_PLAN, Subscription, SubscriptionProvider,
    SubscriptionState,
};

/// Subscription ledger stored next to the application data.
#[derive(Clone)]
pub struct SqliteBilling {
    read_db: SqlitePool,
    write_db: SqlitePool,
    plan: String,
}

impl SqliteBilling {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self {
            read_db,
            write_db,
            plan: PREMIUM_PLAN.to_owned(),
        }
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = plan.into();
        self
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }

    fn select_active(&self) -> SelectStatement {
        Query::select()
            .columns([
                table::Subscription::Id,
                table::Subscription::UserId,
                table::Subscription::Name,
                table::Subscription::Status,
                table::Subscription::PaymentMethod,
                table::Subscription::CreatedAt,
                table::Subscription::EndsAt,
            ])
            .from(table::Subscription::Table)
            .and_where(Expr::col(table::Subscription::Name).eq(self.plan.as_str()))
            .and_where(
                Expr::col(table::Subscription::Status).eq(SubscriptionState::Active.to_string()),
            )
            .to_owned()
    }
}

fn now() -> i64 {
    time::UtcDateTime::now().unix_timestamp()
}

#[async_trait]
impl SubscriptionStatus for SqliteBilling {
    async fn is_active(&self, member_id: i64) -> anyhow::Result<bool> {
        Ok(self.current(member_id).await?.is_some())
    }
}

#[async_trait]
impl SubscriptionProvider for SqliteBilling {
    async fn current(&self, member_id: i64) -> BillingResult<Option<Subscription>> {
        let statement = self
            .select_active()
            .and_where(Expr::col(table::Subscription::UserId).eq(member_id))
            .order_by(table::Subscription::Id, sea_query::Order::Desc)
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Subscription, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }

    async fn create(&self, member_id: i64, payment_method: &str) -> BillingResult<Subscription> {
        if payment_method.trim().is_empty() {
            return Err(BillingError::MissingPaymentMethod);
        }

        if self.current(member_id).await?.is_some() {
            return Err(BillingError::AlreadySubscribed);
        }

        let created_at = now();
        let statement = Query::insert()
            .into_table(table::Subscription::Table)
            .columns([
                table::Subscription::UserId,
                table::Subscription::Name,
                table::Subscription::Status,
                table::Subscription::PaymentMethod,
                table::Subscription::CreatedAt,
            ])
            .values_panic([
                member_id.into(),
                self.plan.clone().into(),
                SubscriptionState::Active.to_string().into(),
                payment_method.to_owned().into(),
                created_at.into(),
            ])
            .to_owned();

        // The unique index on active subscriptions settles concurrent creates
        // that both got past the check above.
        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = match sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
        {
            Ok(result) => result.last_insert_rowid(),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                return Err(BillingError::AlreadySubscribed);
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(member_id, id, plan = %self.plan, "subscription created");

        Ok(Subscription {
            id,
            user_id: member_id,
            name: self.plan.clone(),
            status: sqlx::types::Text(SubscriptionState::Active),
            payment_method: payment_method.to_owned(),
            created_at,
            ends_at: None,
        })
    }

    async fn update_payment_method(
        &self,
        member_id: i64,
        payment_method: &str,
    ) -> BillingResult<()> {
        if payment_method.trim().is_empty() {
            return Err(BillingError::MissingPaymentMethod);
        }

        let statement = Query::update()
            .table(table::Subscription::Table)
            .value(table::Subscription::PaymentMethod, payment_method)
            .and_where(Expr::col(table::Subscription::UserId).eq(member_id))
            .and_where(Expr::col(table::Subscription::Name).eq(self.plan.as_str()))
            .and_where(
                Expr::col(table::Subscription::Status).eq(SubscriptionState::Active.to_string()),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BillingError::NotSubscribed);
        }

        Ok(())
    }

    async fn cancel(&self, member_id: i64) -> BillingResult<()> {
        let statement = Query::update()
            .table(table::Subscription::Table)
            .values([
                (
                    table::Subscription::Status,
                    SubscriptionState::Canceled.to_string().into(),
                ),
                (table::Subscription::EndsAt, now().into()),
            ])
            .and_where(Expr::col(table::Subscription::UserId).eq(member_id))
            .and_where(Expr::col(table::Subscription::Name).eq(self.plan.as_str()))
            .and_where(
                Expr::col(table::Subscription::Status).eq(SubscriptionState::Active.to_string()),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(BillingError::NotSubscribed);
        }

        tracing::info!(member_id, plan = %self.plan, "subscription canceled");

        Ok(())
    }

    async fn count_active(&self) -> BillingResult<i64> {
        let statement = Query::select()
            .expr(Expr::cust("COUNT(DISTINCT user_id)"))
            .from(table::Subscription::Table)
            .and_where(Expr::col(table::Subscription::Name).eq(self.plan.as_str()))
            .and_where(
                Expr::col(table::Subscription::Status).eq(SubscriptionState::Active.to_string()),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(count)
    }
}
