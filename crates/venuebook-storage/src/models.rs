// Database models (internal, may differ from public DTOs)

use sqlx::FromRow;

/// One row of the `event` table. `venue` is the internal venue id,
/// joined back to its name before leaving the storage layer.
#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: i32,
    pub venue: i32,
    pub name: String,
    pub date: String,
    pub event_type: String,
    /// Venue name joined in on reads
    pub venue_name: String,
}

#[derive(Debug, Clone)]
pub struct CreateEventRow {
    pub venue_id: i32,
    pub name: String,
    pub date: String,
    pub event_type: String,
}
