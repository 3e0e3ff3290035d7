//! The attendance ledger and the leave-application state machine.

use chrono::{Datelike, Local, NaiveDate, Utc};
use sevaka_core::{
  Error, Result,
  attendance::{
    AttendanceRecord, AttendanceStatus, DailyAttendance,
    MonthlyAttendanceSummary,
  },
  calendar,
  leave::{LeaveApplication, LeaveStatus, NewLeaveApplication},
  policy::{ANNUAL_LEAVE_ALLOWANCE, MONTHLY_ALERT_FROM_DAY},
};
use uuid::Uuid;

use crate::summary;

fn local_today() -> NaiveDate { Local::now().date_naive() }

/// Owner of the attendance records and leave applications.
///
/// Records are created lazily the first time an employee's attendance is
/// marked for a month, never speculatively. The leave balance is derived
/// from the entries on every read; there is no stored counter to drift.
#[derive(Debug, Default)]
pub struct AttendanceLedger {
  records:      Vec<AttendanceRecord>,
  applications: Vec<LeaveApplication>,
}

impl AttendanceLedger {
  pub fn new() -> Self { Self::default() }

  /// Seed from collections supplied by the persistence layer.
  pub fn with_data(
    records: Vec<AttendanceRecord>,
    applications: Vec<LeaveApplication>,
  ) -> Self {
    Self {
      records,
      applications,
    }
  }

  // ── Attendance ──────────────────────────────────────────────────────────

  /// Mark one day of one employee's month. The record for that month is
  /// resolved or lazily created; an existing day is overwritten in place,
  /// so repeating a call never compounds any derived figure.
  pub fn mark_attendance(
    &mut self,
    employee_id: Uuid,
    employee_number: &str,
    month: u32,
    year: i32,
    day: u32,
    status: AttendanceStatus,
    notes: Option<String>,
  ) -> Result<()> {
    if !(1..=12).contains(&month) {
      return Err(Error::MonthOutOfRange(month));
    }
    if day < 1 || day > calendar::days_in_month(month, year) {
      return Err(Error::DayOutOfRange { day, month, year });
    }

    let index = match self.record_index(employee_id, month, year) {
      Some(index) => index,
      None => {
        let now = Utc::now();
        self.records.push(AttendanceRecord {
          id: Uuid::new_v4(),
          employee_id,
          employee_number: employee_number.to_string(),
          month,
          year,
          entries: Vec::new(),
          created_at: now,
          updated_at: now,
        });
        self.records.len() - 1
      }
    };

    let record = &mut self.records[index];
    let newly_added = record.upsert(DailyAttendance {
      date: day,
      status,
      notes,
    });
    record.updated_at = Utc::now();

    tracing::debug!(
      %employee_id, month, year, day, %status, newly_added,
      "attendance marked"
    );
    Ok(())
  }

  fn record_index(
    &self,
    employee_id: Uuid,
    month: u32,
    year: i32,
  ) -> Option<usize> {
    self.records.iter().position(|r| {
      r.employee_id == employee_id && r.month == month && r.year == year
    })
  }

  pub fn attendance_for(
    &self,
    employee_id: Uuid,
    month: u32,
    year: i32,
  ) -> Option<&AttendanceRecord> {
    self
      .record_index(employee_id, month, year)
      .map(|index| &self.records[index])
  }

  pub fn records(&self) -> &[AttendanceRecord] { &self.records }

  // ── Derived views ───────────────────────────────────────────────────────

  /// The monthly summary, or `None` when no record exists for that
  /// employee/month. Absence of data is distinct from zero attendance;
  /// a zero-filled summary is never fabricated.
  pub fn monthly_summary(
    &self,
    employee_id: Uuid,
    month: u32,
    year: i32,
  ) -> Option<MonthlyAttendanceSummary> {
    self
      .attendance_for(employee_id, month, year)
      .map(summary::summarize)
  }

  /// Summaries for every employee with a record in the given month.
  pub fn all_monthly_summaries(
    &self,
    month: u32,
    year: i32,
  ) -> Vec<MonthlyAttendanceSummary> {
    self
      .records
      .iter()
      .filter(|r| r.month == month && r.year == year)
      .map(summary::summarize)
      .collect()
  }

  /// Remaining annual leave: the fixed allowance minus every
  /// leave-category day across all of the employee's records for `year`,
  /// floored at zero.
  pub fn leave_balance(&self, employee_id: Uuid, year: i32) -> u32 {
    let taken: u32 = self
      .records
      .iter()
      .filter(|r| r.employee_id == employee_id && r.year == year)
      .map(AttendanceRecord::leave_days)
      .sum();
    ANNUAL_LEAVE_ALLOWANCE.saturating_sub(taken)
  }

  // ── Leave applications ──────────────────────────────────────────────────

  /// File a new application in `pending` state. The day count is the
  /// inclusive calendar span, halved for a half-day request.
  pub fn submit_leave(
    &mut self,
    new: NewLeaveApplication,
  ) -> Result<&LeaveApplication> {
    self.submit_leave_as_of(new, local_today())
  }

  /// [`Self::submit_leave`] with an explicit applied date.
  pub fn submit_leave_as_of(
    &mut self,
    new: NewLeaveApplication,
    today: NaiveDate,
  ) -> Result<&LeaveApplication> {
    if new.start_date > new.end_date {
      return Err(Error::InvalidDateRange {
        start: new.start_date,
        end:   new.end_date,
      });
    }

    let span = calendar::days_inclusive(new.start_date, new.end_date) as f64;
    let total_days = if new.is_half_day { span * 0.5 } else { span };

    let now = Utc::now();
    let application = LeaveApplication {
      id: Uuid::new_v4(),
      employee_id: new.employee_id,
      employee_number: new.employee_number,
      leave_type: new.leave_type,
      start_date: new.start_date,
      end_date: new.end_date,
      total_days,
      is_half_day: new.is_half_day,
      reason: new.reason,
      status: LeaveStatus::Pending,
      applied_date: today,
      approved_by: None,
      approved_date: None,
      rejected_reason: None,
      created_at: now,
      updated_at: now,
    };

    tracing::info!(
      id = %application.id,
      employee = %application.employee_id,
      %total_days,
      "leave application submitted"
    );
    self.applications.push(application);
    Ok(self.applications.last().expect("pushed above"))
  }

  /// `pending -> approved`, stamping the approver and the approval date.
  /// A missing or already-settled application is a no-op returning
  /// `false`; approved is terminal.
  pub fn approve_leave(&mut self, id: Uuid, approved_by: &str) -> bool {
    self.approve_leave_as_of(id, approved_by, local_today())
  }

  /// [`Self::approve_leave`] with an explicit approval date.
  pub fn approve_leave_as_of(
    &mut self,
    id: Uuid,
    approved_by: &str,
    today: NaiveDate,
  ) -> bool {
    let Some(application) = self
      .applications
      .iter_mut()
      .find(|a| a.id == id && a.is_pending())
    else {
      return false;
    };
    application.status = LeaveStatus::Approved;
    application.approved_by = Some(approved_by.to_string());
    application.approved_date = Some(today);
    application.updated_at = Utc::now();
    tracing::info!(%id, approved_by, "leave application approved");
    true
  }

  /// `pending -> rejected`, stamping the reason. Same no-op rules as
  /// [`Self::approve_leave`]; rejected is terminal.
  pub fn reject_leave(&mut self, id: Uuid, reason: &str) -> bool {
    let Some(application) = self
      .applications
      .iter_mut()
      .find(|a| a.id == id && a.is_pending())
    else {
      return false;
    };
    application.status = LeaveStatus::Rejected;
    application.rejected_reason = Some(reason.to_string());
    application.updated_at = Utc::now();
    tracing::info!(%id, reason, "leave application rejected");
    true
  }

  pub fn application(&self, id: Uuid) -> Option<&LeaveApplication> {
    self.applications.iter().find(|a| a.id == id)
  }

  pub fn applications(&self) -> &[LeaveApplication] { &self.applications }

  pub fn pending_applications(&self) -> Vec<&LeaveApplication> {
    self.applications_with_status(LeaveStatus::Pending)
  }

  pub fn applications_with_status(
    &self,
    status: LeaveStatus,
  ) -> Vec<&LeaveApplication> {
    self
      .applications
      .iter()
      .filter(|a| a.status == status)
      .collect()
  }

  pub fn applications_for(
    &self,
    employee_id: Uuid,
  ) -> Vec<&LeaveApplication> {
    self
      .applications
      .iter()
      .filter(|a| a.employee_id == employee_id)
      .collect()
  }

  // ── Alerts and maintenance ──────────────────────────────────────────────

  /// End-of-month reminder heuristic: true once today is past the alert
  /// threshold and any record exists for the current real-world month.
  pub fn should_show_monthly_alert(&self) -> bool {
    self.should_show_monthly_alert_as_of(local_today())
  }

  /// [`Self::should_show_monthly_alert`] with an explicit current date.
  pub fn should_show_monthly_alert_as_of(&self, today: NaiveDate) -> bool {
    today.day() > MONTHLY_ALERT_FROM_DAY
      && self
        .records
        .iter()
        .any(|r| r.month == today.month() && r.year == today.year())
  }

  /// Drop one month's records and the applications filed in that month.
  pub fn clear_monthly_data(&mut self, month: u32, year: i32) {
    let records_before = self.records.len();
    let applications_before = self.applications.len();

    self.records.retain(|r| !(r.month == month && r.year == year));
    self.applications.retain(|a| {
      !(a.applied_date.month() == month && a.applied_date.year() == year)
    });

    tracing::info!(
      month,
      year,
      records_removed = records_before - self.records.len(),
      applications_removed = applications_before - self.applications.len(),
      "monthly data cleared"
    );
  }
}
