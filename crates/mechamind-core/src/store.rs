//! Hosted store client.
//!
//! Snapshots land in a Supabase table through its PostgREST interface. The
//! client is built once from a [`StoreConfig`] and handed to whatever needs
//! it; cloning is cheap and shares the underlying connection pool.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Url};

use crate::config::StoreConfig;
use crate::error::{ConfigError, StoreError};
use crate::snapshot::VehicleTelemetrySnapshot;

/// Table the delivery loop writes into.
pub const VEHICLE_DATA_TABLE: &str = "vehicle_data";

/// Per-request timeout for inserts.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest error body kept in [`StoreError::Rejected`].
const MAX_ERROR_BODY: usize = 512;

/// Anything that can persist a snapshot.
///
/// [`StoreClient`] is the production implementation; the delivery loop is
/// generic over this so it can be driven without a network.
#[async_trait]
pub trait SnapshotSink: Send + Sync {
    /// Insert one snapshot as a single row.
    async fn insert(&self, snapshot: &VehicleTelemetrySnapshot) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: SnapshotSink + ?Sized> SnapshotSink for std::sync::Arc<S> {
    async fn insert(&self, snapshot: &VehicleTelemetrySnapshot) -> Result<(), StoreError> {
        (**self).insert(snapshot).await
    }
}

/// Supabase/PostgREST client bound to one project.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    config: StoreConfig,
    table_url: Url,
}

impl StoreClient {
    /// Build a client for `config`, writing into [`VEHICLE_DATA_TABLE`].
    pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
        Self::for_table(config, VEHICLE_DATA_TABLE)
    }

    /// Build a client writing into `table`.
    pub fn for_table(config: StoreConfig, table: &str) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .default_headers(auth_headers(config.anon_key())?)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("mechamind/{}", crate::VERSION))
            .build()
            .map_err(ConfigError::Client)?;
        let table_url = config.table_url(table);
        Ok(Self {
            http,
            config,
            table_url,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Full endpoint inserts are posted to.
    pub fn table_url(&self) -> &Url {
        &self.table_url
    }

    /// Insert `rows` in one request. PostgREST takes a JSON array for bulk
    /// inserts; the delivery loop always sends a single element.
    pub async fn insert_rows(&self, rows: &[VehicleTelemetrySnapshot]) -> Result<(), StoreError> {
        let response = self
            .http
            .post(self.table_url.clone())
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let mut body = response.text().await.unwrap_or_default();
        truncate_at_char_boundary(&mut body, MAX_ERROR_BODY);
        Err(StoreError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl SnapshotSink for StoreClient {
    async fn insert(&self, snapshot: &VehicleTelemetrySnapshot) -> Result<(), StoreError> {
        self.insert_rows(std::slice::from_ref(snapshot)).await
    }
}

/// Supabase expects the key twice: as `apikey` and as a bearer token.
fn auth_headers(anon_key: &str) -> Result<HeaderMap, ConfigError> {
    let invalid = |_| ConfigError::InvalidKey;
    let mut apikey = HeaderValue::from_str(anon_key).map_err(invalid)?;
    apikey.set_sensitive(true);
    let mut bearer = HeaderValue::from_str(&format!("Bearer {anon_key}")).map_err(invalid)?;
    bearer.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert("apikey", apikey);
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

fn truncate_at_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s.truncate(cut);
}
