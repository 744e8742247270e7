//! Describes stored sensor readings.

use crate::prelude::*;

/// One row of the `commonsense` table: a snapshot of the tank temperatures
/// and washer on/off states.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    /// Timestamp assigned by the server at insertion time.
    /// Rows are append-only and this is the sole ordering key.
    pub timestamp: DateTime<Local>,
    pub tank_top_temp: Option<f64>,
    pub tank_bottom_temp: Option<f64>,
    pub ambient_temp: Option<f64>,
    pub washer_1_on: Option<bool>,
    pub washer_2_on: Option<bool>,
    pub washer_3_on: Option<bool>,
}

/// One row of the `washers` table: per-washer on/off state with an
/// associated value.
#[derive(Debug, Clone, PartialEq)]
pub struct WasherEvent {
    /// Timestamp assigned by the server at insertion time.
    pub timestamp: DateTime<Local>,
    pub w1: Option<bool>,
    pub w1_val: Option<f64>,
    pub w2: Option<bool>,
    pub w2_val: Option<f64>,
    pub w3: Option<bool>,
    pub w3_val: Option<f64>,
}

#[cfg(test)]
impl SensorReading {
    /// An empty reading at the given timestamp.
    pub fn at(timestamp: DateTime<Local>) -> Self {
        Self {
            timestamp,
            tank_top_temp: None,
            tank_bottom_temp: None,
            ambient_temp: None,
            washer_1_on: None,
            washer_2_on: None,
            washer_3_on: None,
        }
    }
}
