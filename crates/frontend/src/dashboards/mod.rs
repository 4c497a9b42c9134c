pub mod d100_attendance_summary;

pub use d100_attendance_summary::ui::AttendanceSummaryDashboard;
