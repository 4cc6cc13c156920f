//! Periodic snapshot delivery.
//!
//! Forever: generate a snapshot, insert it, log the outcome, sleep. A failed
//! insert is logged and handed to the observer, then the loop moves on. There
//! is no retry, no backoff and no shutdown path; the process is stopped by
//! killing it.

use std::ops::ControlFlow;
use std::time::Duration;

use log::{error, info};

use crate::error::DeliveryError;
use crate::snapshot::VehicleTelemetrySnapshot;
use crate::store::SnapshotSink;

/// Pause between iterations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Outcome of one loop iteration.
#[derive(Debug)]
pub struct Delivery {
    /// 1-based iteration counter.
    pub iteration: u64,
    /// The snapshot that was stored, or why it was not.
    pub outcome: Result<VehicleTelemetrySnapshot, DeliveryError>,
}

impl Delivery {
    pub fn is_delivered(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Generate-insert-sleep loop over a [`SnapshotSink`].
pub struct DeliveryLoop<S> {
    sink: S,
    interval: Duration,
}

impl<S: SnapshotSink> DeliveryLoop<S> {
    /// Loop over `sink` with the default 5 s interval.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            interval: DEFAULT_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// One iteration without the trailing sleep.
    pub async fn tick(&self) -> Result<VehicleTelemetrySnapshot, DeliveryError> {
        let snapshot = VehicleTelemetrySnapshot::generate();
        match self.sink.insert(&snapshot).await {
            Ok(()) => {
                info!("Inserted snapshot: {snapshot:?}");
                Ok(snapshot)
            }
            Err(e) => {
                error!("Error inserting snapshot: {e}");
                Err(e.into())
            }
        }
    }

    /// Run until `observer` breaks. Every iteration is reported, failed ones
    /// included; the observer is the only way to stop the loop.
    pub async fn run_with<F>(&self, mut observer: F)
    where
        F: FnMut(&Delivery) -> ControlFlow<()>,
    {
        let mut iteration = 0u64;
        loop {
            iteration += 1;
            let delivery = Delivery {
                iteration,
                outcome: self.tick().await,
            };
            if observer(&delivery).is_break() {
                return;
            }
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Run forever.
    pub async fn run(&self) {
        self.run_with(|_| ControlFlow::Continue(())).await;
    }
}
