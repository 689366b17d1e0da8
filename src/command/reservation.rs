use nagoyameshi_db::table::Reservation;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use time::{Date, PrimitiveDateTime, Time, macros::format_description};
use validator::Validate;

use super::{Command, invalid, now};
use crate::error::Result;

#[derive(Debug, Deserialize, Validate)]
pub struct ReservationInput {
    /// `YYYY-MM-DD`
    pub reservation_date: String,
    /// `HH:MM`
    pub reservation_time: String,
    #[validate(range(min = 1, max = 50, message = "Number of people must be between 1 and 50"))]
    pub number_of_people: i64,
}

impl ReservationInput {
    /// Date and time combined into unix seconds, read as UTC.
    pub fn reserved_datetime(&self) -> Result<i64> {
        let date = Date::parse(
            self.reservation_date.trim(),
            format_description!("[year]-[month]-[day]"),
        )
        .map_err(|_| invalid("reservation_date", "date_format", "Use the YYYY-MM-DD format"))?;

        let time = Time::parse(
            self.reservation_time.trim(),
            format_description!("[hour]:[minute]"),
        )
        .map_err(|_| invalid("reservation_time", "date_format", "Use the HH:MM format"))?;

        Ok(PrimitiveDateTime::new(date, time)
            .assume_utc()
            .unix_timestamp())
    }
}

impl Command {
    pub async fn create_reservation(
        &self,
        restaurant_id: i64,
        user_id: i64,
        input: ReservationInput,
    ) -> Result<i64> {
        input.validate()?;
        let reserved_datetime = input.reserved_datetime()?;

        let statement = Query::insert()
            .into_table(Reservation::Table)
            .columns([
                Reservation::RestaurantId,
                Reservation::UserId,
                Reservation::ReservedDatetime,
                Reservation::NumberOfPeople,
                Reservation::CreatedAt,
            ])
            .values_panic([
                restaurant_id.into(),
                user_id.into(),
                reserved_datetime.into(),
                input.number_of_people.into(),
                now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(reservation_id = id, restaurant_id, user_id, "reservation created");

        Ok(id)
    }

    pub async fn delete_reservation(&self, id: i64) -> Result<()> {
        let statement = Query::delete()
            .from_table(Reservation::Table)
            .and_where(Expr::col(Reservation::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(reservation_id = id, "reservation canceled");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str, time: &str) -> ReservationInput {
        ReservationInput {
            reservation_date: date.to_owned(),
            reservation_time: time.to_owned(),
            number_of_people: 2,
        }
    }

    #[test]
    fn date_and_time_combine_as_utc() {
        let reserved = input("2024-05-01", "18:30").reserved_datetime();

        assert!(matches!(reserved, Ok(1_714_588_200)));
    }

    #[test]
    fn malformed_date_or_time_is_a_validation_error() {
        assert!(input("2024/05/01", "18:30").reserved_datetime().is_err());
        assert!(input("2024-02-30", "18:30").reserved_datetime().is_err());
        assert!(input("2024-05-01", "25:00").reserved_datetime().is_err());
        assert!(input("2024-05-01", "6pm").reserved_datetime().is_err());
    }

    #[test]
    fn party_size_is_bounded() {
        let mut reservation = input("2024-05-01", "18:30");
        reservation.number_of_people = 0;
        assert!(reservation.validate().is_err());

        reservation.number_of_people = 51;
        assert!(reservation.validate().is_err());

        reservation.number_of_people = 50;
        assert!(reservation.validate().is_ok());
    }
}
