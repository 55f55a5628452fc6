// --- File: crates/dustout_common/src/features.rs ---
//! Runtime feature flag handling.
//!
//! Integrations are toggled two ways: a `use_*` flag in the configuration
//! and the presence of the matching configuration section. Both must be set
//! for an integration to be wired.

use dustout_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the Google Calendar integration is enabled at runtime.
pub fn is_gcal_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_gcal, config.gcal.as_ref())
}

/// Check if the SMTP email integration is enabled at runtime.
pub fn is_email_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_email, config.email.as_ref())
}
