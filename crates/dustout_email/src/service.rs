// --- File: crates/dustout_email/src/service.rs ---
//! SMTP notification service implementation.
//!
//! Sends booking confirmation emails through an SMTP relay (STARTTLS with
//! credentials). The transport is built once at startup from EmailConfig and
//! reused for every send.

use dustout_common::services::{BoxFuture, NotificationService};
use dustout_config::EmailConfig;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;
use tracing::info;

/// Errors that can occur when sending mail.
#[derive(Error, Debug)]
pub enum SmtpServiceError {
    #[error("Invalid email address: {0}")]
    AddressError(#[from] lettre::address::AddressError),
    #[error("Failed to build email message: {0}")]
    MessageError(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    TransportError(#[from] lettre::transport::smtp::Error),
    #[error("Email configuration missing or incomplete: {0}")]
    ConfigError(String),
}

/// SMTP notification service implementation.
pub struct SmtpNotificationService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

/// Build the sender mailbox from the configured identity,
/// e.g. `DustOut Inc <bookings@dustout.example>`.
pub(crate) fn sender_mailbox(
    name: Option<&str>,
    address: &str,
) -> Result<Mailbox, lettre::address::AddressError> {
    match name {
        Some(name) => format!("{} <{}>", name, address).parse(),
        None => address.parse(),
    }
}

/// Assemble a multipart (text + HTML) confirmation message.
pub(crate) fn build_message(
    sender: &Mailbox,
    to: &str,
    subject: &str,
    text_body: &str,
    html_body: &str,
) -> Result<Message, SmtpServiceError> {
    let to = to.parse::<Mailbox>()?;
    let message = Message::builder()
        .from(sender.clone())
        .to(to)
        .subject(subject)
        .multipart(MultiPart::alternative_plain_html(
            text_body.to_string(),
            html_body.to_string(),
        ))?;
    Ok(message)
}

impl SmtpNotificationService {
    /// Create a new SMTP notification service from configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpServiceError> {
        let password = config.password.clone().ok_or_else(|| {
            SmtpServiceError::ConfigError("SMTP password not set (DUSTOUT__EMAIL__PASSWORD)".into())
        })?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .credentials(Credentials::new(config.username.clone(), password));
        if let Some(port) = config.smtp_port {
            builder = builder.port(port);
        }

        let sender = sender_mailbox(config.sender_name.as_deref(), &config.sender_address)?;

        Ok(Self {
            transport: builder.build(),
            sender,
        })
    }
}

impl NotificationService for SmtpNotificationService {
    type Error = SmtpServiceError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> BoxFuture<'_, (), Self::Error> {
        let message = build_message(&self.sender, to, subject, text_body, html_body);
        let to = to.to_string();

        Box::pin(async move {
            let message = message?;
            self.transport.send(message).await?;
            info!(%to, "Confirmation email sent");
            Ok(())
        })
    }
}
