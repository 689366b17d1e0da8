//! Read side. Every function issues plain `sea-query` selects against the
//! read pool.

pub mod admin;
pub mod company;
pub mod favorite;
pub mod reservation;
pub mod restaurant;
pub mod review;
pub mod stats;
pub mod user;
