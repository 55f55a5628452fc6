// --- File: crates/dustout_booking/src/logic.rs ---
//! Core booking flow: validation, window derivation and orchestration of the
//! scheduling and notification services.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use dustout_common::services::{
    BoxedError, CalendarEvent, EventDraft, NotificationService, SchedulingService,
};

/// Brand token prefixed to every event summary.
pub const BRAND_PREFIX: &str = "DustOut";

/// Every booking occupies exactly one hour. Not configurable.
pub const EVENT_DURATION_MINUTES: i64 = 60;

/// Wall-clock timestamp format used throughout the booking flow.
pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum BookingError {
    /// Client-supplied data is insufficient. Recoverable by resubmission.
    #[error("{0}")]
    Validation(String),
    /// An external service call failed. The upstream message is surfaced.
    #[error("{message}")]
    Integration {
        service_name: &'static str,
        message: String,
    },
}

impl From<BookingError> for dustout_common::DustoutError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => dustout_common::DustoutError::ValidationError(msg),
            BookingError::Integration {
                service_name,
                message,
            } => dustout_common::external_service_error(service_name, message),
        }
    }
}

// --- Data Structures ---

/// A booking submission. Absent JSON fields deserialize to empty strings so
/// that missing and empty are rejected identically.
#[derive(Deserialize, Debug, Clone)]
pub struct BookingRequest {
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub date: String, // YYYY-MM-DD
    #[serde(default)]
    pub time: String, // HH:MM
    #[serde(default)]
    pub email: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct BookingResponse {
    pub ok: bool,
    pub event: CalendarEvent,
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: String,
}

// --- Validation ---

/// Names of the required fields that are missing or empty, in field order.
pub fn missing_fields(request: &BookingRequest) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if request.service.trim().is_empty() {
        missing.push("service");
    }
    if request.date.trim().is_empty() {
        missing.push("date");
    }
    if request.time.trim().is_empty() {
        missing.push("time");
    }
    if request.email.trim().is_empty() {
        missing.push("email");
    }
    missing
}

fn validate(request: &BookingRequest) -> Result<(), BookingError> {
    let missing = missing_fields(request);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(BookingError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

// --- Window Derivation ---

/// Derive the one-hour booking window from the submitted date and time.
///
/// The start is `"{date}T{time}"` interpreted as a local wall-clock
/// timestamp; the end is always start plus [`EVENT_DURATION_MINUTES`],
/// rolling over to the next calendar day when needed.
pub fn derive_window(date: &str, time: &str) -> Result<(NaiveDateTime, NaiveDateTime), BookingError> {
    let raw = format!("{}T{}", date, time);
    let start = NaiveDateTime::parse_from_str(&raw, LOCAL_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M"))
        .map_err(|e| BookingError::Validation(format!("Invalid date or time: {}", e)))?;
    let end = start + Duration::minutes(EVENT_DURATION_MINUTES);
    Ok((start, end))
}

// --- Core Booking Logic ---

/// Process one booking submission.
///
/// Order is fixed: the calendar event is created strictly before the
/// confirmation email, because the email body embeds the event link. If the
/// notification fails after the event was created, the whole request fails
/// and the event is left in place. No compensation, no retries.
pub async fn process_booking(
    scheduling: &dyn SchedulingService<Error = BoxedError>,
    notification: &dyn NotificationService<Error = BoxedError>,
    calendar_id: &str,
    request: BookingRequest,
) -> Result<BookingResponse, BookingError> {
    validate(&request)?;

    let (start, end) = derive_window(&request.date, &request.time)?;

    let draft = EventDraft {
        summary: format!("{}: {}", BRAND_PREFIX, request.service),
        description: Some(format!(
            "Booking for {} by {}",
            request.service, request.email
        )),
        start: start.format(LOCAL_TIME_FORMAT).to_string(),
        end: end.format(LOCAL_TIME_FORMAT).to_string(),
        attendees: vec![request.email.clone()],
    };

    let event = scheduling
        .create_event(calendar_id, draft)
        .await
        .map_err(|e| {
            error!("Calendar error: {}", e);
            BookingError::Integration {
                service_name: "scheduling",
                message: e.to_string(),
            }
        })?;

    let subject = format!(
        "{} Booking Confirmed — {} on {} at {}",
        BRAND_PREFIX, request.service, request.date, request.time
    );
    let text = format!(
        "Your booking for {} is confirmed. Event link: {}",
        request.service,
        event.html_link.as_deref().unwrap_or("—")
    );
    let html = format!("<p>{}</p>", text);

    notification
        .send_email(&request.email, &subject, &text, &html)
        .await
        .map_err(|e| {
            error!("Email error: {}", e);
            BookingError::Integration {
                service_name: "notification",
                message: e.to_string(),
            }
        })?;

    info!(event_id = %event.id, service = %request.service, "Booking confirmed");

    Ok(BookingResponse { ok: true, event })
}
