// Event DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A booked event as returned by the API.
///
/// `venue` is the venue name the caller submitted, not the internal
/// venue id the row is stored against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Event {
    pub id: i32,
    pub venue: String,
    pub name: String,
    /// Calendar date as an opaque string (e.g. "2025-03-15")
    pub date: String,
    /// Free-form category label
    #[serde(rename = "type")]
    pub event_type: String,
}

/// Request to create a new event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Venue name, resolved by exact case-sensitive match
    #[schema(example = "Bohemia")]
    pub venue: String,
    #[schema(example = "toets")]
    pub name: String,
    #[schema(example = "2025-03-15")]
    pub date: String,
    #[serde(rename = "type")]
    #[schema(example = "A live music concert.")]
    pub event_type: String,
}
