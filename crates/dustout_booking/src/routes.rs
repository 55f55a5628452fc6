// --- File: crates/dustout_booking/src/routes.rs ---

use crate::handlers::{book_handler, health_handler, BookingState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing all routes for the booking feature.
/// The caller decides which service implementations live in the state.
pub fn routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/book", post(book_handler))
        .with_state(state)
}
