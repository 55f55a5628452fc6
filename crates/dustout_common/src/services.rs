// --- File: crates/dustout_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! These traits decouple the booking logic from the concrete calendar and
//! email integrations, so implementations can be substituted at process
//! wiring time (real Google Calendar / SMTP in production, in-process
//! fixtures in test mode).

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for scheduling service operations.
///
/// The scheduling service owns calendar events; callers hand it a draft and
/// get back a read-only copy of whatever was created.
pub trait SchedulingService: Send + Sync {
    /// Error type returned by scheduling service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a calendar event from a draft.
    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, CalendarEvent, Self::Error>;
}

/// A trait for notification service operations.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Deliver an email with both a plain-text and an HTML body.
    fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> BoxFuture<'_, (), Self::Error>;
}

/// A factory for creating service instances.
///
/// The backend wires concrete implementations once at startup; handlers only
/// ever see the trait objects handed out here.
pub trait ServiceFactory: Send + Sync {
    /// Get a scheduling service instance.
    fn scheduling_service(&self) -> Option<Arc<dyn SchedulingService<Error = BoxedError>>>;

    /// Get a notification service instance.
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>>;
}

/// Input to [`SchedulingService::create_event`].
///
/// Start and end are local wall-clock timestamps, `%Y-%m-%dT%H:%M:%S`.
/// Implementations attach their configured time zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    /// The summary or title of the event.
    pub summary: String,
    /// An optional description of the event.
    pub description: Option<String>,
    /// The start time of the event.
    pub start: String,
    /// The end time of the event.
    pub end: String,
    /// Attendee email addresses.
    pub attendees: Vec<String>,
}

/// A created calendar event, as returned to the booking client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The ID of the event.
    pub id: String,
    /// The summary or title of the event.
    pub summary: String,
    /// The start time of the event.
    pub start: String,
    /// The end time of the event.
    pub end: String,
    /// Link for viewing or joining the event, if the provider produced one.
    #[serde(rename = "htmlLink", skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
}
