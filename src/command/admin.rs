use nagoyameshi_db::table::Admin;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::{Command, now};
use crate::{
    error::{AppError, Result},
    password::hash_password,
    query,
};

#[derive(Debug, Validate)]
pub struct CreateAdminInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

impl Command {
    pub async fn create_admin(&self, input: CreateAdminInput) -> Result<i64> {
        input.validate()?;

        let email = input.email.trim().to_lowercase();
        if query::admin::find_credentials(&self.read_db, &email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(format!("Administrator {email} already exists")));
        }

        let password = hash_password(&input.password)?;

        let statement = Query::insert()
            .into_table(Admin::Table)
            .columns([Admin::Email, Admin::Password, Admin::CreatedAt])
            .values_panic([email.into(), password.into(), now().into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(admin_id = id, "administrator created");

        Ok(id)
    }
}
