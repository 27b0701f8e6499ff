// Event HTTP routes

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use venuebook_contracts::{CreateEventRequest, Event, ListResponse};
use venuebook_storage::Database;

use crate::error::ApiError;
use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_events))
        .route("/event/", post(create_event))
        .with_state(state)
}

/// GET / - List all events
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "All booked events", body = ListResponse<Event>),
        (status = 500, description = "Storage failure", body = venuebook_contracts::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Event>>, ApiError> {
    let events = state.service.list().await?;
    Ok(Json(ListResponse::new(events)))
}

/// POST /event/ - Create a new event at an existing venue
#[utoipa::path(
    post,
    path = "/event/",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = Event),
        (status = 404, description = "Venue not bound", body = venuebook_contracts::ErrorResponse),
        (status = 422, description = "Invalid payload", body = venuebook_contracts::ErrorResponse),
        (status = 500, description = "Storage failure", body = venuebook_contracts::ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let event = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
