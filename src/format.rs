//! Human-readable strings for the dashboard.

use crate::prelude::*;

/// Formats a timestamp for the summary page.
pub fn human_date(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S").to_string()
}

/// Renders the "washer last turned on" line.
pub fn last_on_string(timestamp: Option<DateTime<Local>>) -> String {
    match timestamp {
        Some(timestamp) => format!("Last turned on {}", human_date(&timestamp)),
        None => "Never turned on".to_string(),
    }
}

/// Formats an optional temperature in degrees Celsius.
pub fn temp_string(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{:.1} °C", value),
        None => "–".to_string(),
    }
}

/// Formats an optional washer on/off state.
pub fn washer_state_string(state: Option<bool>) -> String {
    match state {
        Some(true) => "On".to_string(),
        Some(false) => "Off".to_string(),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date() {
        let timestamp = Local.with_ymd_and_hms(2026, 8, 24, 14, 2, 11).unwrap();
        assert_eq!(human_date(&timestamp), "Mon, 24 Aug 2026 14:02:11");
    }

    #[test]
    fn last_on() {
        let timestamp = Local.with_ymd_and_hms(2026, 8, 24, 14, 2, 11).unwrap();
        assert_eq!(
            last_on_string(Some(timestamp)),
            "Last turned on Mon, 24 Aug 2026 14:02:11"
        );
        assert_eq!(last_on_string(None), "Never turned on");
    }

    #[test]
    fn temperatures() {
        assert_eq!(temp_string(Some(21.34)), "21.3 °C");
        assert_eq!(temp_string(None), "–");
    }

    #[test]
    fn washer_states() {
        assert_eq!(washer_state_string(Some(true)), "On");
        assert_eq!(washer_state_string(Some(false)), "Off");
        assert_eq!(washer_state_string(None), "–");
    }
}
