pub use std::sync::{Arc, Mutex};

pub use chrono::prelude::*;
pub use chrono::Duration;
pub use log::{debug, error, info, warn};
pub use serde::{Deserialize, Serialize};

pub use crate::logging::Log;
pub use crate::reading::{SensorReading, WasherEvent};

pub type Result<T = ()> = anyhow::Result<T>;
