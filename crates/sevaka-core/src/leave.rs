//! Leave applications and their approval state machine.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

// ─── Enumerations ────────────────────────────────────────────────────────────

/// The six applied-for leave categories.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
pub enum LeaveType {
  #[serde(rename = "sick-leave")]
  #[strum(serialize = "sick-leave")]
  Sick,
  #[serde(rename = "casual-leave")]
  #[strum(serialize = "casual-leave")]
  Casual,
  #[serde(rename = "annual-leave")]
  #[strum(serialize = "annual-leave")]
  Annual,
  #[serde(rename = "emergency-leave")]
  #[strum(serialize = "emergency-leave")]
  Emergency,
  #[serde(rename = "maternity-leave")]
  #[strum(serialize = "maternity-leave")]
  Maternity,
  #[serde(rename = "paternity-leave")]
  #[strum(serialize = "paternity-leave")]
  Paternity,
}

/// `pending -(approve)-> approved`, `pending -(reject)-> rejected`;
/// approved and rejected are terminal.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
  Pending,
  Approved,
  Rejected,
}

// ─── Application ─────────────────────────────────────────────────────────────

/// A leave request spanning `start_date..=end_date`. Audit fields are
/// populated only by the corresponding transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
  pub id:              Uuid,
  pub employee_id:     Uuid,
  pub employee_number: String,
  pub leave_type:      LeaveType,
  pub start_date:      NaiveDate,
  /// Inclusive.
  pub end_date:        NaiveDate,
  /// Calendar days in range, halved when `is_half_day`.
  pub total_days:      f64,
  pub is_half_day:     bool,
  pub reason:          String,
  pub status:          LeaveStatus,
  pub applied_date:    NaiveDate,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub approved_by:     Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub approved_date:   Option<NaiveDate>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rejected_reason: Option<String>,
  pub created_at:      DateTime<Utc>,
  pub updated_at:      DateTime<Utc>,
}

impl LeaveApplication {
  pub fn is_pending(&self) -> bool { self.status == LeaveStatus::Pending }
}

// ─── NewLeaveApplication ─────────────────────────────────────────────────────

/// Input to the ledger's `submit_leave`. Identifier, status, stamps, and
/// the day count are assigned by the ledger, not accepted from callers.
#[derive(Debug, Clone)]
pub struct NewLeaveApplication {
  pub employee_id:     Uuid,
  pub employee_number: String,
  pub leave_type:      LeaveType,
  pub start_date:      NaiveDate,
  pub end_date:        NaiveDate,
  pub is_half_day:     bool,
  pub reason:          String,
}

impl NewLeaveApplication {
  /// Convenience constructor for a full-day request with no reason text.
  pub fn new(
    employee_id: Uuid,
    employee_number: impl Into<String>,
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> Self {
    Self {
      employee_id,
      employee_number: employee_number.into(),
      leave_type,
      start_date,
      end_date,
      is_half_day: false,
      reason: String::new(),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn leave_type_wire_tags() {
    let json = serde_json::to_value(LeaveType::Sick).unwrap();
    assert_eq!(json, "sick-leave");
    let json = serde_json::to_value(LeaveType::Paternity).unwrap();
    assert_eq!(json, "paternity-leave");
    assert_eq!(LeaveType::Casual.to_string(), "casual-leave");

    let parsed: LeaveType =
      serde_json::from_value("maternity-leave".into()).unwrap();
    assert_eq!(parsed, LeaveType::Maternity);
  }

  #[test]
  fn leave_status_wire_tags() {
    let json = serde_json::to_value(LeaveStatus::Pending).unwrap();
    assert_eq!(json, "pending");
    assert_eq!(LeaveStatus::Rejected.to_string(), "rejected");
  }
}
