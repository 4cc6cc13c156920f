//! Synthetic vehicle telemetry snapshots.
//!
//! Each field is sampled independently and uniformly from its own inclusive
//! range. Nothing is physically consistent: RPM and speed are uncorrelated,
//! fuel level does not drain between snapshots.

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Engine speed in revolutions per minute.
pub const RPM_RANGE: RangeInclusive<u32> = 800..=1800;
/// Vehicle speed in km/h.
pub const SPEED_RANGE: RangeInclusive<u32> = 40..=100;
/// Coolant temperature in °C.
pub const COOLANT_TEMP_RANGE: RangeInclusive<u32> = 85..=105;
/// Battery voltage in tenths of a volt (12.0 V – 14.5 V).
pub const BATTERY_DECIVOLT_RANGE: RangeInclusive<u32> = 120..=145;
/// Fuel level in percent.
pub const FUEL_LEVEL_RANGE: RangeInclusive<u32> = 10..=90;
/// Calculated engine load in percent.
pub const ENGINE_LOAD_RANGE: RangeInclusive<u32> = 20..=80;

/// One synthetic set of vehicle sensor readings.
///
/// Serializes with the camelCase field names the dashboard and the
/// `vehicle_data` table expect:
///
/// ```json
/// {"rpm":1234,"speed":72,"coolantTemp":91,"batteryVoltage":13.7,
///  "fuelLevel":55,"engineLoad":41,"timestamp":1753761378}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleTelemetrySnapshot {
    pub rpm: u32,
    pub speed: u32,
    pub coolant_temp: u32,
    /// Volts, always a whole number of tenths.
    pub battery_voltage: f64,
    pub fuel_level: u32,
    pub engine_load: u32,
    /// Unix epoch seconds at generation time.
    pub timestamp: u64,
}

impl VehicleTelemetrySnapshot {
    /// Sample a fresh snapshot stamped with the current time.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self::generate_with(&mut rng, unix_timestamp())
    }

    /// Sample a snapshot from `rng` with an explicit timestamp.
    pub fn generate_with<R: Rng>(rng: &mut R, timestamp: u64) -> Self {
        let decivolts = rng.random_range(BATTERY_DECIVOLT_RANGE);
        Self {
            rpm: rng.random_range(RPM_RANGE),
            speed: rng.random_range(SPEED_RANGE),
            coolant_temp: rng.random_range(COOLANT_TEMP_RANGE),
            battery_voltage: f64::from(decivolts) / 10.0,
            fuel_level: rng.random_range(FUEL_LEVEL_RANGE),
            engine_load: rng.random_range(ENGINE_LOAD_RANGE),
            timestamp,
        }
    }
}

/// Current Unix time in whole seconds (0 if the clock reads before the epoch).
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
