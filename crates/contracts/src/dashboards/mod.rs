pub mod d100_attendance_summary;
