//! The employee record and its closed enumerations.
//!
//! `age` and `retired_date` are derived from `date_of_birth` and are never
//! independently authoritative; [`Employee::refresh_derived`] recomputes
//! both and MUST run after any edit that can touch the birth date. The
//! directory in `sevaka-query` owns that call.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

use crate::calendar::{self, MonthDay};

// ─── Closed enumerations ─────────────────────────────────────────────────────

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
pub enum Gender {
  Male,
  Female,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
pub enum MaritalStatus {
  Single,
  Married,
  Divorced,
  Widowed,
}

/// Whether the post is carried on the central or the provincial cadre.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
pub enum ServiceBranch {
  Central,
  Provincial,
}

/// The seven sanctioned posts. Wire labels reproduce the official cadre
/// forms verbatim, irregular casing included.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
pub enum Designation {
  #[serde(rename = "District Officer")]
  #[strum(serialize = "District Officer")]
  DistrictOfficer,
  #[serde(rename = "Asst.District Officer")]
  #[strum(serialize = "Asst.District Officer")]
  AssistantDistrictOfficer,
  #[serde(rename = "Management Service Officer")]
  #[strum(serialize = "Management Service Officer")]
  ManagementServiceOfficer,
  #[serde(rename = "Development Officer")]
  #[strum(serialize = "Development Officer")]
  DevelopmentOfficer,
  #[serde(rename = "Extension officer")]
  #[strum(serialize = "Extension officer")]
  ExtensionOfficer,
  #[serde(rename = "Office employee service")]
  #[strum(serialize = "Office employee service")]
  OfficeEmployeeService,
  #[serde(rename = "Garden labour")]
  #[strum(serialize = "Garden labour")]
  GardenLabour,
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display,
  EnumString, EnumIter,
)]
pub enum SalaryCode {
  M1,
  M2,
  M3,
  A1,
  A2,
  B3,
  C3,
  C4,
}

// ─── Sub-records ─────────────────────────────────────────────────────────────

/// Three-line postal address as it appears on the personal file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub line1: String,
  pub line2: String,
  pub line3: String,
}

/// Sparse set of grade promotion milestones, at most one date per grade.
/// Grades are ordered III -> II -> I -> Supra.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeAppointments {
  #[serde(rename = "gradeIII")]
  pub grade_iii: Option<NaiveDate>,
  #[serde(rename = "gradeII")]
  pub grade_ii:  Option<NaiveDate>,
  #[serde(rename = "gradeI")]
  pub grade_i:   Option<NaiveDate>,
  #[serde(rename = "gradeSupra")]
  pub supra:     Option<NaiveDate>,
}

// ─── Employee ────────────────────────────────────────────────────────────────

/// The identity and employment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:                     Uuid,
  /// Unique, immutable once assigned.
  pub employee_number:        String,
  pub full_name:              String,
  pub designation:            Designation,
  pub ministry:               String,
  pub gender:                 Gender,
  pub marital_status:         MaritalStatus,
  pub personal_address:       Address,
  pub mobile_number:          String,
  pub email_address:          String,

  /// Old (10-char) or new (12-digit) format; validated by the NIC codec
  /// before commit.
  pub nic_number:             String,
  pub date_of_birth:          Option<NaiveDate>,
  /// Derived from `date_of_birth`; never edited directly.
  pub age:                    Option<u32>,
  /// Derived: birth date plus the fixed retirement age.
  pub retired_date:           Option<NaiveDate>,

  pub first_appointment_date: Option<NaiveDate>,
  pub grade_appointments:     GradeAppointments,
  pub appointment_letter_no:  String,
  /// Salary increment anniversary, `dd-MM`.
  pub increment_date:         Option<MonthDay>,
  pub wop_number:             String,
  pub educational_qualification: String,
  pub service_branch:         ServiceBranch,
  pub date_of_arrival:        Option<NaiveDate>,
  pub status:                 String,
  pub date_of_transfer:       Option<NaiveDate>,
  pub eb_pass:                bool,
  pub service_confirmed:      bool,
  pub second_language_passed: bool,
  pub salary_code:            SalaryCode,

  pub created_at:             DateTime<Utc>,
  pub updated_at:             DateTime<Utc>,
}

impl Employee {
  /// Recompute `age` and `retired_date` from `date_of_birth` as of `today`.
  pub fn refresh_derived(&mut self, today: NaiveDate) {
    self.age = self
      .date_of_birth
      .map(|birth| calendar::calculate_age(birth, today));
    self.retired_date = self.date_of_birth.map(calendar::retirement_date);
  }
}

// ─── Boundary helpers ────────────────────────────────────────────────────────

/// Group free-typed digits as `0XX XXX XXXX`, dropping anything past ten
/// digits.
pub fn format_mobile_number(raw: &str) -> String {
  let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
  match digits.len() {
    0..=3 => digits,
    4..=6 => format!("{} {}", &digits[..3], &digits[3..]),
    _ => format!(
      "{} {} {}",
      &digits[..3],
      &digits[3..6],
      &digits[6..digits.len().min(10)]
    ),
  }
}

/// Minimal shape check: one `@`, whitespace-free local part, dotted domain.
pub fn is_valid_email(s: &str) -> bool {
  let s = s.trim();
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  !local.is_empty()
    && !local.contains(char::is_whitespace)
    && !domain.contains('@')
    && !domain.contains(char::is_whitespace)
    && domain
      .split('.')
      .filter(|part| !part.is_empty())
      .count()
      >= 2
    && !domain.starts_with('.')
    && !domain.ends_with('.')
}

/// `EMP` + six digits from the clock + three characters of random hex,
/// used when a form is submitted without an employee number.
pub fn generate_employee_number(now: DateTime<Utc>) -> String {
  let stamp = now.timestamp().unsigned_abs() % 1_000_000;
  let nonce = Uuid::new_v4().simple().to_string();
  format!("EMP{stamp:06}{}", nonce[..3].to_uppercase())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
