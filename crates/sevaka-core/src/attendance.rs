//! Attendance model: per-day entries, the monthly record that owns them,
//! and the derived monthly summary.
//!
//! A record exists only once an employee's attendance has been marked for
//! that month; absence of a record is meaningful (no data), distinct from a
//! record full of absences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::leave::LeaveType;

// ─── Status ──────────────────────────────────────────────────────────────────

/// Per-day attendance status. Whether a status consumes the annual leave
/// allowance is resolved here, once, not by string inspection at call
/// sites.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
  Present,
  Absent,
  HalfDay,
  Leave,
  SickLeave,
  CasualLeave,
  AnnualLeave,
  EmergencyLeave,
}

impl AttendanceStatus {
  /// Whether a day with this status counts against the leave allowance.
  pub fn is_leave(self) -> bool {
    matches!(
      self,
      Self::Leave
        | Self::SickLeave
        | Self::CasualLeave
        | Self::AnnualLeave
        | Self::EmergencyLeave
    )
  }

  /// The leave sub-type tallied in [`LeaveBreakdown`]; `None` for the
  /// generic `leave` status and for non-leave statuses.
  pub fn leave_type(self) -> Option<LeaveType> {
    match self {
      Self::SickLeave => Some(LeaveType::Sick),
      Self::CasualLeave => Some(LeaveType::Casual),
      Self::AnnualLeave => Some(LeaveType::Annual),
      Self::EmergencyLeave => Some(LeaveType::Emergency),
      _ => None,
    }
  }
}

// ─── Daily entry ─────────────────────────────────────────────────────────────

/// One day's status within a month. At most one entry per day; writing an
/// existing day overwrites it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyAttendance {
  /// Day of month, `1..=days_in_month`.
  pub date:   u32,
  pub status: AttendanceStatus,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub notes:  Option<String>,
}

// ─── Monthly record ──────────────────────────────────────────────────────────

/// One employee's attendance for one month. Entries keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
  pub id:              Uuid,
  pub employee_id:     Uuid,
  pub employee_number: String,
  /// `1..=12`.
  pub month:           u32,
  pub year:            i32,
  pub entries:         Vec<DailyAttendance>,
  pub created_at:      DateTime<Utc>,
  pub updated_at:      DateTime<Utc>,
}

impl AttendanceRecord {
  pub fn entry(&self, date: u32) -> Option<&DailyAttendance> {
    self.entries.iter().find(|e| e.date == date)
  }

  /// Insert or overwrite the entry for its day, preserving insertion
  /// order. Returns `true` when the day was not previously present.
  pub fn upsert(&mut self, entry: DailyAttendance) -> bool {
    match self.entries.iter_mut().find(|e| e.date == entry.date) {
      Some(existing) => {
        *existing = entry;
        false
      }
      None => {
        self.entries.push(entry);
        true
      }
    }
  }

  /// Number of days carrying the exact given status.
  pub fn count_status(&self, status: AttendanceStatus) -> u32 {
    self.entries.iter().filter(|e| e.status == status).count() as u32
  }

  /// Number of days marked with any leave-category status. The leave
  /// balance is derived from this count; no stored counter exists to
  /// drift out of sync with the entries.
  pub fn leave_days(&self) -> u32 {
    self.entries.iter().filter(|e| e.status.is_leave()).count() as u32
  }
}

// ─── Derived summary ─────────────────────────────────────────────────────────

/// Tally of the six named leave sub-types within one month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LeaveBreakdown {
  pub sick_leave:      u32,
  pub casual_leave:    u32,
  pub annual_leave:    u32,
  pub emergency_leave: u32,
  pub maternity_leave: u32,
  pub paternity_leave: u32,
}

impl LeaveBreakdown {
  pub fn tally(&mut self, leave_type: LeaveType) {
    match leave_type {
      LeaveType::Sick => self.sick_leave += 1,
      LeaveType::Casual => self.casual_leave += 1,
      LeaveType::Annual => self.annual_leave += 1,
      LeaveType::Emergency => self.emergency_leave += 1,
      LeaveType::Maternity => self.maternity_leave += 1,
      LeaveType::Paternity => self.paternity_leave += 1,
    }
  }
}

/// Derived view of one employee-month; recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAttendanceSummary {
  pub employee_id:           Uuid,
  pub employee_number:       String,
  pub month:                 u32,
  pub year:                  i32,
  /// Calendar length of the month.
  pub total_working_days:    u32,
  pub total_present:         u32,
  pub total_absent:          u32,
  pub total_half_days:       u32,
  pub total_leaves:          u32,
  pub leave_breakdown:       LeaveBreakdown,
  /// `round((present + half * 0.5) / total_working_days * 100)`.
  pub attendance_percentage: u32,
}

// ─── Tests ───────────────────────────────────────────────────────────────────
