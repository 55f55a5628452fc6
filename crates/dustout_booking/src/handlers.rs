// --- File: crates/dustout_booking/src/handlers.rs ---
use crate::logic::{process_booking, BookingRequest, BookingResponse, HealthResponse};
use axum::{
    extract::State,
    response::Json,
};
use dustout_config::AppConfig;
use dustout_common::services::{BoxedError, NotificationService, SchedulingService};
use dustout_common::DustoutError;
use std::sync::Arc;
use tracing::error;

// Shared state needed by booking handlers. The concrete scheduling and
// notification services are chosen once at process wiring time.
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub scheduling: Arc<dyn SchedulingService<Error = BoxedError>>,
    pub notification: Arc<dyn NotificationService<Error = BoxedError>>,
}

impl BookingState {
    fn calendar_id(&self) -> String {
        self.config
            .gcal
            .as_ref()
            .and_then(|g| g.calendar_id.clone())
            .unwrap_or_else(|| "primary".to_string())
    }
}

/// Handler for the health check endpoint.
#[axum::debug_handler]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: "DustOut server running".to_string(),
    })
}

/// Handler for booking submissions.
#[axum::debug_handler]
pub async fn book_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, DustoutError> {
    let calendar_id = state.calendar_id();

    match process_booking(
        state.scheduling.as_ref(),
        state.notification.as_ref(),
        &calendar_id,
        payload,
    )
    .await
    {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!("Booking error: {}", err);
            Err(err.into())
        }
    }
}
