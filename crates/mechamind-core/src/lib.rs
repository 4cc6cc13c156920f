//! # mechamind-core
//!
//! Simulated vehicle telemetry for the MechaMind+ dashboard.
//!
//! `mechamind-core` produces synthetic OBD-style readings (RPM, speed,
//! coolant temperature, battery voltage, fuel level, engine load) and pushes
//! them into a hosted Supabase table on a fixed cadence.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mechamind_core::{DeliveryLoop, StoreClient, StoreConfig};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! // SUPABASE_URL / SUPABASE_ANON_KEY from the environment or .env
//! let config = StoreConfig::from_env()?;
//! let client = StoreClient::new(config)?;
//!
//! // One snapshot every 5 seconds, forever
//! DeliveryLoop::new(client).run().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Generator → Sink (store client) → `vehicle_data` table
//!
//! Every snapshot is sampled fresh and never cached. The delivery loop is
//! best-effort: a failed insert is logged and reported to the loop observer,
//! and the next iteration runs as scheduled.

pub mod config;
pub mod delivery;
pub mod error;
pub mod snapshot;
pub mod store;

pub use config::{StoreConfig, ANON_KEY_VAR, URL_VAR};
pub use delivery::{DEFAULT_INTERVAL, Delivery, DeliveryLoop};
pub use error::{ConfigError, DeliveryError, StoreError};
pub use snapshot::{VehicleTelemetrySnapshot, unix_timestamp};
pub use store::{SnapshotSink, StoreClient, VEHICLE_DATA_TABLE};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
