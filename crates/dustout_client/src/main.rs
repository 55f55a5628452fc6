// --- File: crates/dustout_client/src/main.rs ---
//! CLI booking client for the DustOut booking service.
//!
//! Serializes the booking fields as JSON, POSTs them to the booking
//! endpoint and renders the outcome. Validation is the server's job; the
//! client only relays what it was given.

use anyhow::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/book";
const GENERIC_FAILURE: &str = "Booking failed";

#[derive(Parser, Debug)]
#[command(name = "dustout-client", about = "Submit a DustOut booking")]
struct Args {
    /// Booking endpoint URL
    #[arg(long, env = "DUSTOUT_BOOKING_URL", default_value = DEFAULT_ENDPOINT)]
    url: String,

    /// Service to book, e.g. "Home Cleaning"
    #[arg(long)]
    service: String,

    /// Booking date, YYYY-MM-DD
    #[arg(long)]
    date: String,

    /// Booking time, HH:MM
    #[arg(long)]
    time: String,

    /// Email address for the confirmation
    #[arg(long)]
    email: String,
}

#[derive(Serialize)]
struct BookingForm {
    service: String,
    date: String,
    time: String,
    email: String,
}

#[derive(Deserialize)]
struct BookedEvent {
    id: String,
    summary: String,
    start: String,
    end: String,
    #[serde(rename = "htmlLink")]
    html_link: Option<String>,
}

#[derive(Deserialize)]
struct BookingReply {
    #[serde(default)]
    ok: bool,
    event: Option<BookedEvent>,
    error: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let form = BookingForm {
        service: args.service,
        date: args.date,
        time: args.time,
        email: args.email,
    };

    let response = reqwest::Client::new()
        .post(&args.url)
        .json(&form)
        .send()
        .await;

    let response = match response {
        Ok(response) => response,
        Err(err) => {
            // Network failure: generic fallback, the server never answered.
            eprintln!("{}: {}", GENERIC_FAILURE, err);
            std::process::exit(1);
        }
    };

    let status = response.status();
    let reply: BookingReply = match response.json().await {
        Ok(reply) => reply,
        Err(_) => BookingReply {
            ok: false,
            event: None,
            error: None,
        },
    };

    if !status.is_success() || !reply.ok {
        let message = reply.error.unwrap_or_else(|| GENERIC_FAILURE.to_string());
        eprintln!("{}", message);
        std::process::exit(1);
    }

    println!("Booking confirmed — check your email & calendar.");
    if let Some(event) = reply.event {
        println!("  {} ({} to {})", event.summary, event.start, event.end);
        println!("  Event id: {}", event.id);
        if let Some(link) = event.html_link {
            println!("  Event link: {}", link);
        }
    }

    Ok(())
}
