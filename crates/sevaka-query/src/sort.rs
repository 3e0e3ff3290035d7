//! Type-aware employee sorting.

use std::cmp::Ordering;

use chrono::NaiveDate;
use sevaka_core::employee::Employee;

// ─── Sort parameters ─────────────────────────────────────────────────────────

/// The sortable columns of the employee list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
  EmployeeNumber,
  FullName,
  Designation,
  Ministry,
  NicNumber,
  Gender,
  MaritalStatus,
  SalaryCode,
  Age,
  DateOfBirth,
  FirstAppointmentDate,
  RetiredDate,
  DateOfTransfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
  Ascending,
  Descending,
}

// ─── Keys ────────────────────────────────────────────────────────────────────

/// A field's comparison key: numbers compare arithmetically, dates
/// chronologically, everything else as case-insensitive text.
enum SortKey {
  Int(i64),
  Date(NaiveDate),
  Text(String),
}

fn sort_key(e: &Employee, field: SortField) -> Option<SortKey> {
  match field {
    SortField::EmployeeNumber => {
      Some(SortKey::Text(e.employee_number.to_lowercase()))
    }
    SortField::FullName => Some(SortKey::Text(e.full_name.to_lowercase())),
    SortField::Designation => {
      Some(SortKey::Text(e.designation.to_string().to_lowercase()))
    }
    SortField::Ministry => Some(SortKey::Text(e.ministry.to_lowercase())),
    SortField::NicNumber => Some(SortKey::Text(e.nic_number.to_lowercase())),
    SortField::Gender => Some(SortKey::Text(e.gender.to_string().to_lowercase())),
    SortField::MaritalStatus => {
      Some(SortKey::Text(e.marital_status.to_string().to_lowercase()))
    }
    SortField::SalaryCode => {
      Some(SortKey::Text(e.salary_code.to_string().to_lowercase()))
    }
    SortField::Age => e.age.map(|age| SortKey::Int(i64::from(age))),
    SortField::DateOfBirth => e.date_of_birth.map(SortKey::Date),
    SortField::FirstAppointmentDate => {
      e.first_appointment_date.map(SortKey::Date)
    }
    SortField::RetiredDate => e.retired_date.map(SortKey::Date),
    SortField::DateOfTransfer => e.date_of_transfer.map(SortKey::Date),
  }
}

fn compare_keys(a: &SortKey, b: &SortKey) -> Ordering {
  match (a, b) {
    (SortKey::Int(x), SortKey::Int(y)) => x.cmp(y),
    (SortKey::Date(x), SortKey::Date(y)) => x.cmp(y),
    (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
    // A field always yields one key shape; mixed pairs cannot occur.
    _ => Ordering::Equal,
  }
}

// ─── Sorting ─────────────────────────────────────────────────────────────────

/// Stable sort by one field. Missing values order after everything when
/// ascending and before everything when descending, so flipping the
/// direction reverses the list exactly.
pub fn sort_employees(
  employees: &mut [&Employee],
  field: SortField,
  direction: SortDirection,
) {
  employees.sort_by(|a, b| {
    let ordering = match (sort_key(a, field), sort_key(b, field)) {
      (Some(x), Some(y)) => compare_keys(&x, &y),
      (Some(_), None) => Ordering::Less,
      (None, Some(_)) => Ordering::Greater,
      (None, None) => Ordering::Equal,
    };
    match direction {
      SortDirection::Ascending => ordering,
      SortDirection::Descending => ordering.reverse(),
    }
  });
}

// ─── Tests ───────────────────────────────────────────────────────────────────
