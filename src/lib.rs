pub mod auth;
pub mod command;
pub mod config;
pub mod db;
pub mod error;
pub mod gate;
pub mod observability;
pub mod password;
pub mod query;
pub mod routes;

pub use db::{create_pool, create_read_pool, create_write_pool, migrate};
pub use routes::{AppState, router};
