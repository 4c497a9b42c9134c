use contracts::dashboards::d100_attendance_summary::AttendancePeriod;
use serde::Deserialize;

pub const DEFAULT_SUMMARY_ENDPOINT: &str = "/attendance/summary/";
pub const DEFAULT_REFRESH_INTERVAL_MS: u32 = 5 * 60 * 1000;

/// Settings passed by the hosting page to `mount_attendance_summary`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AttendanceWidgetConfig {
    pub endpoint: String,
    pub initial_period: AttendancePeriod,
    pub refresh_interval_ms: u32,
}

impl Default for AttendanceWidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SUMMARY_ENDPOINT.to_string(),
            initial_period: AttendancePeriod::default(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: AttendanceWidgetConfig =
            serde_json::from_str(r#"{"initialPeriod": "week"}"#).unwrap();
        assert_eq!(config.endpoint, "/attendance/summary/");
        assert_eq!(config.initial_period, AttendancePeriod::Week);
        assert_eq!(config.refresh_interval_ms, 300_000);
    }
}
