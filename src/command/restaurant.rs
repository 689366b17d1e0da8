use std::sync::LazyLock;

use nagoyameshi_db::table::{
    Category, CategoryRestaurant, RegularHoliday, RegularHolidayRestaurant, Restaurant,
};
use regex::Regex;
use sea_query::{Expr, ExprTrait, IntoColumnRef, IntoTableRef, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::{Sqlite, SqlitePool, Transaction};
use validator::Validate;

use super::{Command, invalid, now};
use crate::error::{AppError, Result};

static RE_POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{7}$").unwrap());
static RE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").unwrap());

/// Restaurant form used by administrators. `category_ids` and
/// `regular_holiday_ids` replace the current links on every write.
#[derive(Debug, Deserialize, Validate)]
pub struct RestaurantInput {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0, message = "Lowest price must not be negative"))]
    pub lowest_price: i64,
    #[validate(range(min = 0, message = "Highest price must not be negative"))]
    pub highest_price: i64,
    #[validate(regex(path = *RE_POSTAL_CODE, message = "Postal code must be 7 digits"))]
    pub postal_code: String,
    #[validate(length(min = 1, max = 255, message = "Address is required"))]
    pub address: String,
    #[validate(regex(path = *RE_TIME, message = "Opening time must be HH:MM"))]
    pub opening_time: String,
    #[validate(regex(path = *RE_TIME, message = "Closing time must be HH:MM"))]
    pub closing_time: String,
    #[validate(range(min = 0, message = "Seating capacity must not be negative"))]
    pub seating_capacity: i64,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub regular_holiday_ids: Vec<i64>,
}

impl RestaurantInput {
    /// Validates the form, then trims times to `HH:MM` and drops zero and
    /// repeated link ids.
    fn checked(mut self) -> Result<Self> {
        self.validate()?;

        if self.lowest_price > self.highest_price {
            return Err(invalid(
                "highest_price",
                "range",
                "Highest price must not be lower than the lowest price",
            )
            .into());
        }

        self.opening_time.truncate(5);
        self.closing_time.truncate(5);

        for ids in [&mut self.category_ids, &mut self.regular_holiday_ids] {
            ids.retain(|id| *id > 0);
            ids.sort_unstable();
            ids.dedup();
        }

        Ok(self)
    }

    fn values(&self) -> [(Restaurant, Expr); 9] {
        [
            (Restaurant::Name, self.name.clone().into()),
            (Restaurant::Description, self.description.clone().into()),
            (Restaurant::LowestPrice, self.lowest_price.into()),
            (Restaurant::HighestPrice, self.highest_price.into()),
            (Restaurant::PostalCode, self.postal_code.clone().into()),
            (Restaurant::Address, self.address.clone().into()),
            (Restaurant::OpeningTime, self.opening_time.clone().into()),
            (Restaurant::ClosingTime, self.closing_time.clone().into()),
            (Restaurant::SeatingCapacity, self.seating_capacity.into()),
        ]
    }
}

impl Command {
    pub async fn create_restaurant(&self, input: RestaurantInput) -> Result<i64> {
        let input = input.checked()?;
        self.check_links(&input).await?;

        let (columns, values): (Vec<_>, Vec<_>) = input.values().into_iter().unzip();
        let statement = Query::insert()
            .into_table(Restaurant::Table)
            .columns(columns.into_iter().chain([Restaurant::CreatedAt]))
            .values_panic(values.into_iter().chain([now().into()]))
            .to_owned();

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        sync_links(&mut tx, id, &input).await?;
        tx.commit().await?;

        tracing::info!(restaurant_id = id, name = %input.name, "restaurant created");

        Ok(id)
    }

    pub async fn update_restaurant(&self, id: i64, input: RestaurantInput) -> Result<()> {
        let input = input.checked()?;
        self.check_links(&input).await?;

        let statement = Query::update()
            .table(Restaurant::Table)
            .values(input.values())
            .and_where(Expr::col(Restaurant::Id).eq(id))
            .to_owned();

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("restaurant"));
        }

        sync_links(&mut tx, id, &input).await?;
        tx.commit().await?;

        tracing::info!(restaurant_id = id, "restaurant updated");

        Ok(())
    }

    /// Deletes the restaurant. Its reviews, reservations, favorites and links
    /// go with it through the foreign keys.
    pub async fn delete_restaurant(&self, id: i64) -> Result<()> {
        let statement = Query::delete()
            .from_table(Restaurant::Table)
            .and_where(Expr::col(Restaurant::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("restaurant"));
        }

        tracing::info!(restaurant_id = id, "restaurant deleted");

        Ok(())
    }

    async fn check_links(&self, input: &RestaurantInput) -> Result<()> {
        if !all_exist(&self.read_db, Category::Table, Category::Id, &input.category_ids).await? {
            return Err(invalid("category_ids", "exists", "Unknown category").into());
        }

        if !all_exist(
            &self.read_db,
            RegularHoliday::Table,
            RegularHoliday::Id,
            &input.regular_holiday_ids,
        )
        .await?
        {
            return Err(invalid("regular_holiday_ids", "exists", "Unknown regular holiday").into());
        }

        Ok(())
    }
}

async fn all_exist(
    pool: &SqlitePool,
    table: impl IntoTableRef,
    id: impl IntoColumnRef,
    ids: &[i64],
) -> Result<bool> {
    if ids.is_empty() {
        return Ok(true);
    }

    let statement = Query::select()
        .expr(Expr::cust("COUNT(*)"))
        .from(table)
        .and_where(Expr::col(id).is_in(ids.iter().copied()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
        .fetch_one(pool)
        .await?;

    Ok(count as usize == ids.len())
}

/// Replaces the category and regular holiday links of `restaurant_id`.
async fn sync_links(
    tx: &mut Transaction<'_, Sqlite>,
    restaurant_id: i64,
    input: &RestaurantInput,
) -> Result<()> {
    let statement = Query::delete()
        .from_table(CategoryRestaurant::Table)
        .and_where(Expr::col(CategoryRestaurant::RestaurantId).eq(restaurant_id))
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut **tx).await?;

    let statement = Query::delete()
        .from_table(RegularHolidayRestaurant::Table)
        .and_where(Expr::col(RegularHolidayRestaurant::RestaurantId).eq(restaurant_id))
        .to_owned();
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut **tx).await?;

    if !input.category_ids.is_empty() {
        let mut statement = Query::insert()
            .into_table(CategoryRestaurant::Table)
            .columns([CategoryRestaurant::CategoryId, CategoryRestaurant::RestaurantId])
            .to_owned();
        for category_id in &input.category_ids {
            statement.values_panic([(*category_id).into(), restaurant_id.into()]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut **tx).await?;
    }

    if !input.regular_holiday_ids.is_empty() {
        let mut statement = Query::insert()
            .into_table(RegularHolidayRestaurant::Table)
            .columns([
                RegularHolidayRestaurant::RegularHolidayId,
                RegularHolidayRestaurant::RestaurantId,
            ])
            .to_owned();
        for holiday_id in &input.regular_holiday_ids {
            statement.values_panic([(*holiday_id).into(), restaurant_id.into()]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut **tx).await?;
    }

    Ok(())
}
