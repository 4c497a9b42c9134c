mod dashboard;
mod donut;

pub use dashboard::AttendanceSummaryDashboard;
pub use donut::{donut_segments, DonutChart};
