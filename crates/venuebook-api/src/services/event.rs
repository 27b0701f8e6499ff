// Event service for business logic

use std::sync::Arc;
use venuebook_contracts::{CreateEventRequest, Event};
use venuebook_storage::{CreateEventRow, Database, EventRow};

use crate::error::ApiError;

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Resolve the venue name, then insert. An unknown venue aborts
    /// before any write reaches the event table.
    pub async fn create(&self, req: CreateEventRequest) -> Result<Event, ApiError> {
        if req.venue.is_empty() {
            return Err(ApiError::Validation(
                "venue must be a non-empty string".to_string(),
            ));
        }

        let venue_id = self
            .db
            .find_venue_id(&req.venue)
            .await?
            .ok_or_else(|| ApiError::VenueNotFound(req.venue.clone()))?;

        let row = self
            .db
            .insert_event(CreateEventRow {
                venue_id,
                name: req.name,
                date: req.date,
                event_type: req.event_type,
            })
            .await?;

        Ok(Self::row_to_event(row))
    }

    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        let rows = self.db.list_events().await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    fn row_to_event(row: EventRow) -> Event {
        Event {
            id: row.id,
            venue: row.venue_name,
            name: row.name,
            date: row.date,
            event_type: row.event_type,
        }
    }
}
