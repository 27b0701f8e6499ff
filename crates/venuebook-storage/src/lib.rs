// Postgres storage layer with sqlx
//
// This crate owns the `venue` and `event` tables:
// - Database: pooled connection handle with the repository methods
// - models: row types returned by the repositories

pub mod models;
pub mod repositories;

pub use models::*;
pub use repositories::Database;
