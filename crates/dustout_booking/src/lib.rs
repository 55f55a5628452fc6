// --- File: crates/dustout_booking/src/lib.rs ---
// Declare modules within this crate
pub mod fixtures;
pub mod handlers;
#[cfg(test)]
mod handlers_test;
pub mod logic;
#[cfg(test)]
mod logic_test;
pub mod routes;
