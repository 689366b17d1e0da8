//! Write side. Inputs are validated here before anything touches the write
//! pool.

use sqlx::SqlitePool;
use validator::{ValidationError, ValidationErrors};

mod admin;
mod favorite;
mod reservation;
mod restaurant;
mod review;
mod user;

pub use admin::CreateAdminInput;
pub use reservation::ReservationInput;
pub use restaurant::RestaurantInput;
pub use review::ReviewInput;
pub use user::{ProfileInput, RegisterInput};

#[derive(Clone)]
pub struct Command {
    pub read_db: SqlitePool,
    pub write_db: SqlitePool,
}

impl Command {
    pub fn new(read_db: SqlitePool, write_db: SqlitePool) -> Self {
        Self { read_db, write_db }
    }
}

fn now() -> i64 {
    time::UtcDateTime::now().unix_timestamp()
}

/// Single-field validation failure, for checks `validator` derives can't
/// express.
fn invalid(field: &'static str, code: &'static str, message: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, ValidationError::new(code).with_message(message.into()));
    errors
}
