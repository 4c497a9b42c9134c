use crate::shared::api_utils::{get_json, with_query};
use contracts::dashboards::d100_attendance_summary::{
    AttendancePeriod, AttendanceSummary, AttendanceSummaryQuery,
};

/// Build the summary URL for a period
pub fn summary_url(endpoint: &str, period: AttendancePeriod) -> Result<String, String> {
    with_query(endpoint, &AttendanceSummaryQuery { period })
}

/// Fetch present/absent counts for the period
pub async fn get_attendance_summary(
    endpoint: &str,
    period: AttendancePeriod,
) -> Result<AttendanceSummary, String> {
    let url = summary_url(endpoint, period)?;
    get_json::<AttendanceSummary>(&url).await
}

/// Any fetch failure renders as an empty summary
pub fn summary_or_default(result: Result<AttendanceSummary, String>) -> AttendanceSummary {
    match result {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Error fetching attendance data: {}", e);
            AttendanceSummary::default()
        }
    }
}

/// Same as [`get_attendance_summary`] but any failure yields a zeroed summary
pub async fn get_attendance_summary_or_default(
    endpoint: &str,
    period: AttendancePeriod,
) -> AttendanceSummary {
    summary_or_default(get_attendance_summary(endpoint, period).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_attendance_summary::ui::donut_segments;

    #[test]
    fn test_summary_url() {
        assert_eq!(
            summary_url("/attendance/summary/", AttendancePeriod::Month).unwrap(),
            "/attendance/summary/?period=month"
        );
    }

    #[test]
    fn test_server_error_renders_empty_chart() {
        let summary = summary_or_default(Err("HTTP error: 500".to_string()));
        assert_eq!(summary, AttendanceSummary::new(0, 0));
        assert_eq!(summary.total(), 0);

        let segments = donut_segments(&summary);
        assert!(segments.iter().all(|s| s.value == 0 && s.length == 0.0));
        assert_eq!(segments[1].legend_text(), "Absent: 0 (0%)");
    }

    #[test]
    fn test_successful_fetch_passes_through() {
        let summary = summary_or_default(Ok(AttendanceSummary::new(8, 2)));
        assert_eq!(summary.total(), 10);
        assert_eq!(summary.present_percent(), 80);
    }
}
