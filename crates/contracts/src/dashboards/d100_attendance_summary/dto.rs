use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting window for the attendance summary
///
/// The vocabulary is owned by the backend; these are the values
/// `/attendance/summary/` understands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendancePeriod {
    #[default]
    Day,
    Week,
    Month,
}

impl AttendancePeriod {
    /// Value sent in the `period` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendancePeriod::Day => "day",
            AttendancePeriod::Week => "week",
            AttendancePeriod::Month => "month",
        }
    }

    /// Caption shown on the period toggle
    pub fn display_name(&self) -> &'static str {
        match self {
            AttendancePeriod::Day => "Daily",
            AttendancePeriod::Week => "Weekly",
            AttendancePeriod::Month => "Monthly",
        }
    }

    pub fn all() -> [AttendancePeriod; 3] {
        [
            AttendancePeriod::Day,
            AttendancePeriod::Week,
            AttendancePeriod::Month,
        ]
    }
}

impl fmt::Display for AttendancePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendancePeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(AttendancePeriod::Day),
            "week" => Ok(AttendancePeriod::Week),
            "month" => Ok(AttendancePeriod::Month),
            other => Err(format!("Unknown attendance period: {}", other)),
        }
    }
}

/// Query string for `GET /attendance/summary/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryQuery {
    pub period: AttendancePeriod,
}

/// Present/absent head count for one period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    #[serde(default)]
    pub present: u32,
    #[serde(default)]
    pub absent: u32,
}

impl AttendanceSummary {
    pub fn new(present: u32, absent: u32) -> Self {
        Self { present, absent }
    }

    pub fn total(&self) -> u32 {
        self.present.saturating_add(self.absent)
    }

    /// Share of `value` in the total, rounded to a whole percent (0 for an empty summary)
    pub fn percent_of_total(&self, value: u32) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (f64::from(value) / f64::from(total) * 100.0).round() as u32
    }

    pub fn present_percent(&self) -> u32 {
        self.percent_of_total(self.present)
    }

    pub fn absent_percent(&self) -> u32 {
        self.percent_of_total(self.absent)
    }
}
