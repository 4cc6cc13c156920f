//! HTTP telemetry server for the MechaMind+ dashboard.
//!
//! Serves freshly simulated vehicle snapshots. The dashboard polls
//! `/vehicle-data` every couple of seconds from its own origin, so every
//! route answers CORS preflights.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::Method,
    response::Json,
    routing::get,
};
use log::info;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use mechamind_core::{StoreClient, VehicleTelemetrySnapshot};

/// Body of `GET /`.
pub const BANNER: &str = "MechaMind+ Backend";

/// Shared server state.
pub struct AppState {
    /// Configured at startup but not queried yet: `/vehicle-data` serves
    /// simulated values, not rows from the store.
    store: StoreClient,
}

impl AppState {
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &StoreClient {
        &self.store
    }
}

#[derive(Serialize)]
struct MessageResponse {
    message: &'static str,
}

async fn handle_index() -> Json<MessageResponse> {
    Json(MessageResponse { message: BANNER })
}

// Query parameters are ignored and nothing is read from the store.
async fn handle_vehicle_data(State(_state): State<Arc<AppState>>) -> Json<VehicleTelemetrySnapshot> {
    Json(VehicleTelemetrySnapshot::generate())
}

/// Build the axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(handle_index))
        .route("/vehicle-data", get(handle_vehicle_data))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP telemetry server until the process is killed.
pub async fn run_server(store: StoreClient, host: &str, port: u16) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(store));
    info!("Store configured at {}", state.store().table_url());

    let app = build_router(state);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
