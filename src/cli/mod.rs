mod admin;
mod migrate;
mod server;

pub use admin::create_admin;
pub use migrate::{migrate, reset};
pub use server::serve;
