// --- File: crates/dustout_booking/src/fixtures.rs ---
//! Fixture implementations of the scheduling and notification services.
//!
//! These satisfy the same capability interfaces as the real integrations and
//! are selected at process wiring time when `test_mode` is set, so the
//! request/response contract can be exercised without contacting Google
//! Calendar or an SMTP relay. The booking handler itself has no test-mode
//! knowledge.

use dustout_common::services::{
    BoxFuture, BoxedError, CalendarEvent, EventDraft, NotificationService, SchedulingService,
};
use tracing::info;

/// Sentinel event id returned by the fixture scheduler.
pub const FIXTURE_EVENT_ID: &str = "test-event-123";

/// Placeholder link returned by the fixture scheduler.
pub const FIXTURE_EVENT_LINK: &str = "http://localhost:5173/fake-event";

/// Scheduling service that fabricates an event instead of calling out.
///
/// The event echoes the draft's summary and window, so the window-derivation
/// rule is exercised exactly as in production.
pub struct FixtureSchedulingService;

impl SchedulingService for FixtureSchedulingService {
    type Error = BoxedError;

    fn create_event(
        &self,
        _calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, CalendarEvent, Self::Error> {
        Box::pin(async move {
            info!("Test mode: skipping Google Calendar, returning fixture event");
            Ok(CalendarEvent {
                id: FIXTURE_EVENT_ID.to_string(),
                summary: draft.summary,
                start: draft.start,
                end: draft.end,
                html_link: Some(FIXTURE_EVENT_LINK.to_string()),
            })
        })
    }
}

/// Notification service that logs instead of sending mail.
pub struct FixtureNotificationService;

impl NotificationService for FixtureNotificationService {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        _text_body: &str,
        _html_body: &str,
    ) -> BoxFuture<'_, (), Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        Box::pin(async move {
            info!(%to, %subject, "Test mode: skipping confirmation email");
            Ok(())
        })
    }
}
