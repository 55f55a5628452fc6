// --- File: crates/dustout_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Google Calendar Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GcalConfig {
    pub key_path: Option<String>, // Service account key JSON file
    pub calendar_id: Option<String>,
    pub time_zone: Option<String>, // IANA name, defaults to Europe/Zurich
                                   // Secrets loaded directly from env vars:
                                   // GOOGLE_CALENDAR_SERVICE_ACCOUNT_JSON
}

// --- SMTP Email Config ---
// Holds the confirmation-mail sender identity and SMTP relay settings.
// The password is expected via env override: DUSTOUT__EMAIL__PASSWORD
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: Option<u16>,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    pub sender_name: Option<String>, // e.g. "DustOut Inc"
    pub sender_address: String,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    /// Wire fixture scheduling/notification services instead of the real ones.
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default)]
    pub use_gcal: bool,
    #[serde(default)]
    pub use_email: bool,

    /// Origin allowed for cross-origin booking form submissions.
    #[serde(default)]
    pub allowed_origin: Option<String>,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub email: Option<EmailConfig>,
}
