//! Monthly summary derivation.

use sevaka_core::{
  attendance::{
    AttendanceRecord, AttendanceStatus, LeaveBreakdown,
    MonthlyAttendanceSummary,
  },
  calendar,
};

/// Fold one record into its derived monthly view. Total working days is
/// the calendar length of the month; the percentage counts a half-day as
/// half a present day, rounded to the nearest whole percent.
pub fn summarize(record: &AttendanceRecord) -> MonthlyAttendanceSummary {
  let total_working_days = calendar::days_in_month(record.month, record.year);

  let total_present = record.count_status(AttendanceStatus::Present);
  let total_absent = record.count_status(AttendanceStatus::Absent);
  let total_half_days = record.count_status(AttendanceStatus::HalfDay);
  let total_leaves = record.leave_days();

  let mut leave_breakdown = LeaveBreakdown::default();
  for entry in &record.entries {
    if let Some(leave_type) = entry.status.leave_type() {
      leave_breakdown.tally(leave_type);
    }
  }

  let attendance_percentage =
    percentage(total_present, total_half_days, total_working_days);

  MonthlyAttendanceSummary {
    employee_id: record.employee_id,
    employee_number: record.employee_number.clone(),
    month: record.month,
    year: record.year,
    total_working_days,
    total_present,
    total_absent,
    total_half_days,
    total_leaves,
    leave_breakdown,
    attendance_percentage,
  }
}

/// `round((present + half * 0.5) / working_days * 100)`, 0 when the
/// working-day denominator is 0.
fn percentage(present: u32, half_days: u32, working_days: u32) -> u32 {
  if working_days == 0 {
    return 0;
  }
  let attended = f64::from(present) + f64::from(half_days) * 0.5;
  (attended / f64::from(working_days) * 100.0).round() as u32
}
