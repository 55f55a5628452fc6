// File: services/dustout_backend/src/main.rs
use axum::Router;
use dustout_booking::handlers::BookingState;
use dustout_booking::routes as booking_routes;
use dustout_common::services::ServiceFactory;
use dustout_config::load_config;
use http::{header, HeaderValue, Method};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

mod service_factory;
use service_factory::DustoutServiceFactory;

const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[tokio::main]
async fn main() {
    dustout_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    // Wire services once at startup; test_mode substitutes fixtures here,
    // never inside the handlers.
    let factory = DustoutServiceFactory::new(config.clone()).await;
    let scheduling = factory
        .scheduling_service()
        .expect("No scheduling service wired; enable use_gcal with a gcal section or set test_mode");
    let notification = factory
        .notification_service()
        .expect("No notification service wired; enable use_email with an email section or set test_mode");

    let state = Arc::new(BookingState {
        config: config.clone(),
        scheduling,
        notification,
    });

    let allowed_origin = config
        .allowed_origin
        .clone()
        .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string());
    let cors = CorsLayer::new()
        .allow_origin(
            allowed_origin
                .parse::<HeaderValue>()
                .expect("Invalid allowed_origin"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = Router::new()
        .nest("/api", booking_routes::routes(state))
        .layer(cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    info!("Booking server running on http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
