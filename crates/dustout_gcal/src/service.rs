// --- File: crates/dustout_gcal/src/service.rs ---
//! Google Calendar scheduling service implementation.
//!
//! This module provides an implementation of the SchedulingService trait for
//! Google Calendar.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use dustout_common::services::{BoxFuture, CalendarEvent, EventDraft, SchedulingService};
use google_calendar3::api::{Event, EventAttendee, EventDateTime, EventReminders};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::auth::HubType;

/// Wall-clock timestamp format accepted from and returned to the booking flow.
const LOCAL_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Failed to parse time: {0}")]
    TimeParseError(String),
    #[error("Created event is missing an id")]
    MissingEventId,
}

/// Google Calendar scheduling service implementation.
pub struct GoogleSchedulingService {
    calendar_hub: Arc<HubType>,
    time_zone: Tz,
}

impl GoogleSchedulingService {
    /// Create a new Google Calendar scheduling service.
    ///
    /// `time_zone` is the IANA name the booking's local wall-clock times are
    /// interpreted in; falls back to Europe/Zurich when absent or invalid.
    pub fn new(calendar_hub: Arc<HubType>, time_zone: Option<&str>) -> Self {
        let time_zone = time_zone
            .and_then(|name| Tz::from_str(name).ok())
            .unwrap_or(Tz::Europe__Zurich);
        Self {
            calendar_hub,
            time_zone,
        }
    }
}

/// Interpret a local wall-clock timestamp in the given zone and convert to UTC.
pub(crate) fn parse_local(
    raw: &str,
    time_zone: Tz,
    field: &str,
) -> Result<DateTime<Utc>, GcalServiceError> {
    let naive = NaiveDateTime::parse_from_str(raw, LOCAL_TIME_FORMAT)
        .map_err(|e| GcalServiceError::TimeParseError(format!("Invalid {}: {}", field, e)))?;
    naive
        .and_local_timezone(time_zone)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            GcalServiceError::TimeParseError(format!(
                "Ambiguous or nonexistent local time for {}: {}",
                field, raw
            ))
        })
}

impl SchedulingService for GoogleSchedulingService {
    type Error = GcalServiceError;

    /// Creates a calendar event from a booking draft.
    ///
    /// The draft's attendees are invited and notified (`sendUpdates=all`),
    /// and default reminders apply. The returned event carries the provider
    /// id and view link; start/end echo the draft's local wall-clock window.
    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, CalendarEvent, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();
        let time_zone = self.time_zone;

        Box::pin(async move {
            let start_dt = parse_local(&draft.start, time_zone, "start")?;
            let end_dt = parse_local(&draft.end, time_zone, "end")?;

            let new_event = Event {
                summary: Some(draft.summary.clone()),
                description: draft.description.clone(),
                start: Some(EventDateTime {
                    date_time: Some(start_dt),
                    time_zone: Some(time_zone.name().to_string()),
                    ..Default::default()
                }),
                end: Some(EventDateTime {
                    date_time: Some(end_dt),
                    time_zone: Some(time_zone.name().to_string()),
                    ..Default::default()
                }),
                attendees: Some(
                    draft
                        .attendees
                        .iter()
                        .map(|email| EventAttendee {
                            email: Some(email.clone()),
                            ..Default::default()
                        })
                        .collect(),
                ),
                reminders: Some(EventReminders {
                    use_default: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .send_updates("all")
                .doit()
                .await?;

            let id = created_event.id.ok_or(GcalServiceError::MissingEventId)?;
            info!(event_id = %id, "Created Google Calendar event");

            Ok(CalendarEvent {
                id,
                summary: created_event.summary.unwrap_or(draft.summary),
                start: draft.start,
                end: draft.end,
                html_link: created_event.html_link,
            })
        })
    }
}
