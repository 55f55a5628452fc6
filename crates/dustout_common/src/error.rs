// --- File: crates/dustout_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all DustOut errors.
///
/// Crates convert their domain errors into one of these two classes by
/// implementing From<SpecificError> for DustoutError. The Display output is
/// the bare message, since it is what clients see in the response body.
#[derive(Error, Debug)]
pub enum DustoutError {
    /// Client-supplied data is insufficient or malformed.
    #[error("{0}")]
    ValidationError(String),

    /// An external service call failed. The upstream message is surfaced.
    #[error("{message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for DustoutError {
    fn status_code(&self) -> u16 {
        match self {
            DustoutError::ValidationError(_) => 400,
            DustoutError::ExternalServiceError { .. } => 500,
        }
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> DustoutError {
    DustoutError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> DustoutError {
    DustoutError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(validation_error("missing fields").status_code(), 400);
    }

    #[test]
    fn integration_errors_map_to_500() {
        let err = external_service_error("google_calendar", "insert failed");
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn display_is_the_bare_message() {
        assert_eq!(
            validation_error("Missing required fields: service").to_string(),
            "Missing required fields: service"
        );
        assert_eq!(
            external_service_error("google_calendar", "insert failed").to_string(),
            "insert failed"
        );
    }
}
