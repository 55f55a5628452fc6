// --- File: crates/services/dustout_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Wires the concrete scheduling and notification services once at process
//! start. In test mode the fixture implementations are selected instead of
//! the real integrations; the booking handlers never know the difference.

use dustout_booking::fixtures::{FixtureNotificationService, FixtureSchedulingService};
use dustout_common::{is_email_enabled, is_gcal_enabled};
use dustout_common::services::{
    BoxFuture, BoxedError, CalendarEvent, EventDraft, NotificationService, SchedulingService,
    ServiceFactory,
};
use dustout_config::AppConfig;
use dustout_email::service::SmtpNotificationService;
use dustout_gcal::{auth::create_calendar_hub, service::GoogleSchedulingService};
use std::sync::Arc;
use tracing::{error, info};

/// Wrapper that converts GcalServiceError into the trait-object error type.
struct BoxedSchedulingService {
    inner: GoogleSchedulingService,
}

impl SchedulingService for BoxedSchedulingService {
    type Error = BoxedError;

    fn create_event(
        &self,
        calendar_id: &str,
        draft: EventDraft,
    ) -> BoxFuture<'_, CalendarEvent, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let inner = &self.inner;

        Box::pin(async move {
            inner
                .create_event(&calendar_id, draft)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

/// Wrapper that converts SmtpServiceError into the trait-object error type.
struct BoxedNotificationService {
    inner: SmtpNotificationService,
}

impl NotificationService for BoxedNotificationService {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> BoxFuture<'_, (), Self::Error> {
        let to = to.to_string();
        let subject = subject.to_string();
        let text_body = text_body.to_string();
        let html_body = html_body.to_string();
        let inner = &self.inner;

        Box::pin(async move {
            inner
                .send_email(&to, &subject, &text_body, &html_body)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

/// Service factory for the DustOut backend.
pub struct DustoutServiceFactory {
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    scheduling_service: Option<Arc<dyn SchedulingService<Error = BoxedError>>>,
    notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

impl DustoutServiceFactory {
    /// Create a new service factory.
    pub async fn new(config: Arc<AppConfig>) -> Self {
        let mut factory = Self {
            config: config.clone(),
            scheduling_service: None,
            notification_service: None,
        };

        if config.test_mode {
            info!("Test mode enabled: wiring fixture scheduling and notification services.");
            factory.scheduling_service = Some(Arc::new(FixtureSchedulingService));
            factory.notification_service = Some(Arc::new(FixtureNotificationService));
            return factory;
        }

        if is_gcal_enabled(&config) {
            info!("Initializing Google Calendar scheduling service...");
            let gcal_config = config.gcal.as_ref().unwrap();
            match create_calendar_hub(gcal_config).await {
                Ok(hub) => {
                    let service = GoogleSchedulingService::new(
                        Arc::new(hub),
                        gcal_config.time_zone.as_deref(),
                    );
                    factory.scheduling_service =
                        Some(Arc::new(BoxedSchedulingService { inner: service }));
                    info!("Google Calendar scheduling service initialized.");
                }
                Err(e) => {
                    error!("Failed to initialize Google Calendar service: {}", e);
                }
            }
        } else {
            info!("Google Calendar disabled via runtime config or missing gcal section.");
        }

        if is_email_enabled(&config) {
            info!("Initializing SMTP notification service...");
            match SmtpNotificationService::new(config.email.as_ref().unwrap()) {
                Ok(service) => {
                    factory.notification_service =
                        Some(Arc::new(BoxedNotificationService { inner: service }));
                    info!("SMTP notification service initialized.");
                }
                Err(e) => {
                    error!("Failed to initialize SMTP notification service: {}", e);
                }
            }
        } else {
            info!("SMTP email disabled via runtime config or missing email section.");
        }

        factory
    }
}

impl ServiceFactory for DustoutServiceFactory {
    fn scheduling_service(&self) -> Option<Arc<dyn SchedulingService<Error = BoxedError>>> {
        self.scheduling_service.clone()
    }

    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        self.notification_service.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> Arc<AppConfig> {
        Arc::new(serde_json::from_str(json).unwrap())
    }

    #[tokio::test]
    async fn test_test_mode_wires_fixture_services() {
        let factory = DustoutServiceFactory::new(config(
            r#"{ "server": { "host": "127.0.0.1", "port": 5000 }, "test_mode": true }"#,
        ))
        .await;

        assert!(factory.scheduling_service().is_some());
        assert!(factory.notification_service().is_some());
    }

    #[tokio::test]
    async fn test_disabled_integrations_wire_nothing() {
        let factory = DustoutServiceFactory::new(config(
            r#"{ "server": { "host": "127.0.0.1", "port": 5000 } }"#,
        ))
        .await;

        assert!(factory.scheduling_service().is_none());
        assert!(factory.notification_service().is_none());
    }
}
