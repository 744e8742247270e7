//! History thinning.
//!
//! Sensors post fields as separate writes, so a single physical event shows
//! up as a burst of rows with timestamps microseconds apart. The thinner
//! keeps one representative per burst so the history page is not dominated
//! by near-duplicates.

use crate::consts::MIN_GAP_MS;
use crate::prelude::*;

/// Collapses bursts of near-simultaneous readings in a history page.
///
/// The input must be ordered by timestamp descending (newest first), as
/// returned by [`crate::db::Db::select_readings`]. A reading is kept iff it
/// is more than [`MIN_GAP_MS`] milliseconds newer than the reading that
/// follows it. The final reading of a page has no successor to compare
/// against and is never emitted, so a page of `n ≥ 2` rows renders at most
/// `n - 1`. That boundary rule is part of the display contract and is
/// relied upon by pagination.
pub fn thin(readings: Vec<SensorReading>) -> Vec<SensorReading> {
    if readings.len() < 2 {
        return readings;
    }
    let mut thinned = Vec::with_capacity(readings.len() - 1);
    for pair in readings.windows(2) {
        if (pair[0].timestamp - pair[1].timestamp).num_milliseconds() > MIN_GAP_MS {
            thinned.push(pair[0].clone());
        }
    }
    thinned
}
