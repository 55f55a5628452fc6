// --- File: crates/dustout_email/src/lib.rs ---
// Declare modules within this crate
pub mod service;
