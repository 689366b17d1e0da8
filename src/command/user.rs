use std::sync::LazyLock;

use nagoyameshi_db::table::User;
use regex::Regex;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use validator::Validate;

use super::{Command, now};
use crate::{
    error::{AppError, Result},
    password::hash_password,
    query,
};

static RE_KANA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ァ-ヴー\s]+$").unwrap());
static RE_POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{7}$").unwrap());
static RE_PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10,11}$").unwrap());
static RE_BIRTHDAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{8}$").unwrap());

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(
        length(min = 1, max = 255),
        regex(path = *RE_KANA, message = "Kana must be written in katakana")
    )]
    pub kana: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(regex(path = *RE_POSTAL_CODE, message = "Postal code must be 7 digits"))]
    pub postal_code: String,
    #[validate(length(min = 1, max = 255))]
    pub address: String,
    #[validate(regex(path = *RE_PHONE_NUMBER, message = "Phone number must be 10 or 11 digits"))]
    pub phone_number: String,
    #[validate(regex(path = *RE_BIRTHDAY, message = "Birthday must be 8 digits (YYYYMMDD)"))]
    pub birthday: Option<String>,
    #[validate(length(max = 255))]
    pub occupation: Option<String>,
}

impl ProfileInput {
    /// Lowercases the email and turns blank optional fields into `None`, the
    /// way an empty form field should read.
    fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.birthday = self.birthday.filter(|v| !v.trim().is_empty());
        self.occupation = self.occupation.filter(|v| !v.trim().is_empty());
        self
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterInput {
    #[serde(flatten)]
    pub profile: ProfileInput,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl Command {
    pub async fn register(&self, input: RegisterInput) -> Result<i64> {
        let input = RegisterInput {
            profile: input.profile.normalized(),
            password: input.password,
        };
        input.profile.validate()?;
        input.validate()?;

        if query::user::email_taken(&self.read_db, &input.profile.email, None).await? {
            return Err(AppError::Conflict("Email is already registered".to_owned()));
        }

        let password = hash_password(&input.password)?;
        let profile = input.profile;

        let statement = Query::insert()
            .into_table(User::Table)
            .columns([
                User::Name,
                User::Kana,
                User::Email,
                User::Password,
                User::PostalCode,
                User::Address,
                User::PhoneNumber,
                User::Birthday,
                User::Occupation,
                User::CreatedAt,
            ])
            .values_panic([
                profile.name.into(),
                profile.kana.into(),
                profile.email.into(),
                password.into(),
                profile.postal_code.into(),
                profile.address.into(),
                profile.phone_number.into(),
                profile.birthday.into(),
                profile.occupation.into(),
                now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(user_id = id, "member registered");

        Ok(id)
    }

    pub async fn update_profile(&self, id: i64, input: ProfileInput) -> Result<()> {
        let input = input.normalized();
        input.validate()?;

        if query::user::email_taken(&self.read_db, &input.email, Some(id)).await? {
            return Err(AppError::Conflict("Email is already registered".to_owned()));
        }

        let statement = Query::update()
            .table(User::Table)
            .values([
                (User::Name, input.name.into()),
                (User::Kana, input.kana.into()),
                (User::Email, input.email.into()),
                (User::PostalCode, input.postal_code.into()),
                (User::Address, input.address.into()),
                (User::PhoneNumber, input.phone_number.into()),
                (User::Birthday, input.birthday.into()),
                (User::Occupation, input.occupation.into()),
                (User::UpdatedAt, now().into()),
            ])
            .and_where(Expr::col(User::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        tracing::info!(user_id = id, "profile updated");

        Ok(())
    }
}
