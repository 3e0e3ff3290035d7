//! Calendar arithmetic and the day-first date notation.
//!
//! Every user-facing date in the system is written day-first: `dd-MM-yyyy`
//! for full dates, `dd-MM` for year-less increment dates. This module owns
//! parsing, masking, and validation of that notation, plus the Gregorian
//! helpers shared across the workspace. The NIC codec and the attendance
//! ledger both route their leap-year checks through [`is_leap_year`] so the
//! two can never drift.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::policy::RETIREMENT_AGE_YEARS;

// ─── Gregorian helpers ───────────────────────────────────────────────────────

/// Gregorian leap rule: divisible by 4 and (not by 100, or by 400).
pub fn is_leap_year(year: i32) -> bool {
  (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for a month outside `1..=12`
/// (callers validate the month before asking).
pub fn days_in_month(month: u32, year: i32) -> u32 {
  match month {
    1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
    4 | 6 | 9 | 11 => 30,
    2 if is_leap_year(year) => 29,
    2 => 28,
    _ => 0,
  }
}

/// Ordinal-day construction: `Jan 1 + (day - 1)` within `year`.
pub fn date_from_day_of_year(year: i32, day: u32) -> Option<NaiveDate> {
  NaiveDate::from_yo_opt(year, day)
}

/// The inverse of [`date_from_day_of_year`].
pub fn day_of_year(date: NaiveDate) -> u32 { date.ordinal() }

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Split on `-` or `/`, requiring every part to be non-empty ASCII digits.
fn numeric_parts(s: &str) -> Option<Vec<&str>> {
  let parts: Vec<&str> = s.split(['-', '/']).collect();
  if parts
    .iter()
    .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
  {
    return None;
  }
  Some(parts)
}

/// Parse `dd-MM-yyyy` / `dd/MM/yyyy`, or `dd-MM` / `dd/MM` with the current
/// year assumed. One- or two-digit day and month are accepted.
/// Calendar-invalid combinations (31-04, 29-02 off leap years) yield `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
  parse_date_in_year(s, Local::now().date_naive().year())
}

/// [`parse_date`] with an explicit year to assume for the `dd-MM` form.
pub fn parse_date_in_year(s: &str, assumed_year: i32) -> Option<NaiveDate> {
  let parts = numeric_parts(s.trim())?;
  match parts.as_slice() {
    [day, month, year]
      if day.len() <= 2 && month.len() <= 2 && year.len() == 4 =>
    {
      NaiveDate::from_ymd_opt(
        year.parse().ok()?,
        month.parse().ok()?,
        day.parse().ok()?,
      )
    }
    [day, month] if day.len() <= 2 && month.len() <= 2 => {
      NaiveDate::from_ymd_opt(
        assumed_year,
        month.parse().ok()?,
        day.parse().ok()?,
      )
    }
    _ => None,
  }
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Render a date in the display notation, `dd-MM-yyyy`.
pub fn format_display(date: NaiveDate) -> String {
  date.format("%d-%m-%Y").to_string()
}

/// Re-emit any parseable input in the canonical `dd-MM-yyyy` form.
pub fn normalize_date_input(s: &str) -> Option<String> {
  parse_date(s).map(format_display)
}

/// Live-format free-typed digits into `dd-MM-yyyy`: dashes are inserted
/// after the day and month groups as the user types, and anything past ten
/// characters is dropped.
pub fn mask_date_input(raw: &str) -> String {
  let mut cleaned: String = raw
    .chars()
    .filter(|c| c.is_ascii_digit() || *c == '-')
    .collect();

  if cleaned.len() >= 2 && !cleaned.contains('-') {
    cleaned.insert(2, '-');
  }

  if cleaned.len() >= 5 {
    let parts: Vec<String> = cleaned.split('-').map(str::to_owned).collect();
    if parts.len() == 2 && parts[1].len() >= 2 {
      cleaned = format!("{}-{}-{}", parts[0], &parts[1][..2], &parts[1][2..]);
    }
  }

  cleaned.truncate(10);
  cleaned
}

/// The `dd-MM` variant of [`mask_date_input`], truncating past five
/// characters.
pub fn mask_month_day_input(raw: &str) -> String {
  let mut cleaned: String = raw
    .chars()
    .filter(|c| c.is_ascii_digit() || *c == '-')
    .collect();

  if cleaned.len() >= 2 && !cleaned.contains('-') {
    cleaned.insert(2, '-');
  }

  cleaned.truncate(5);
  cleaned
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// Which notation [`validate_date_format`] should enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormatMode {
  /// `dd-MM-yyyy`, checked for calendar validity.
  Full,
  /// `dd-MM`, checked for plausible day/month bounds only.
  MonthDay,
}

/// Strict shape check for the dashed notation. `Full` mode additionally
/// requires the parts to name a real calendar date (so `31-02-2024` fails);
/// `MonthDay` mode bounds day to `1..=31` and month to `1..=12`.
pub fn validate_date_format(s: &str, mode: DateFormatMode) -> bool {
  let parts: Vec<&str> = s.split('-').collect();
  if parts
    .iter()
    .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
  {
    return false;
  }

  match (mode, parts.as_slice()) {
    (DateFormatMode::Full, [day, month, year])
      if day.len() <= 2 && month.len() <= 2 && year.len() == 4 =>
    {
      // `from_ymd_opt` rejects any combination whose round-trip fields
      // would differ from the input, so no separate equality check.
      match (day.parse(), month.parse(), year.parse()) {
        (Ok(d), Ok(m), Ok(y)) => NaiveDate::from_ymd_opt(y, m, d).is_some(),
        _ => false,
      }
    }
    (DateFormatMode::MonthDay, [day, month])
      if day.len() <= 2 && month.len() <= 2 =>
    {
      match (day.parse::<u32>(), month.parse::<u32>()) {
        (Ok(d), Ok(m)) => (1..=31).contains(&d) && (1..=12).contains(&m),
        _ => false,
      }
    }
    _ => false,
  }
}

// ─── Ages and ranges ─────────────────────────────────────────────────────────

/// Completed years between `birth` and `today`, borrowing one year when
/// today's month/day precedes the birth month/day.
pub fn calculate_age(birth: NaiveDate, today: NaiveDate) -> u32 {
  let mut age = today.year() - birth.year();
  if (today.month(), today.day()) < (birth.month(), birth.day()) {
    age -= 1;
  }
  age.max(0) as u32
}

/// Birth date plus the fixed retirement age.
pub fn retirement_date(birth: NaiveDate) -> NaiveDate {
  let year = birth.year() + RETIREMENT_AGE_YEARS;
  // Only 29 Feb can fail to land in the target year; clamp to 28 Feb.
  NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
    .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    .expect("28 Feb exists in every year")
}

/// Both endpoints parse in the display notation AND start <= end.
pub fn is_valid_date_range(start: &str, end: &str) -> bool {
  match (parse_date(start), parse_date(end)) {
    (Some(s), Some(e)) => s <= e,
    _ => false,
  }
}

/// Inclusive day count between two dates, order-insensitive.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> i64 {
  (end - start).num_days().abs() + 1
}

/// [`days_inclusive`] over display-notation strings; `None` unless both
/// endpoints parse.
pub fn date_range_days(start: &str, end: &str) -> Option<i64> {
  Some(days_inclusive(parse_date(start)?, parse_date(end)?))
}

// ─── Month labels ────────────────────────────────────────────────────────────

const MONTH_NAMES: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

/// English month name, or `""` for a month outside `1..=12`.
pub fn month_name(month: u32) -> &'static str {
  month
    .checked_sub(1)
    .and_then(|i| MONTH_NAMES.get(i as usize))
    .copied()
    .unwrap_or("")
}

/// `"March 2024"`-style label for summary headings.
pub fn month_year_label(month: u32, year: i32) -> String {
  format!("{} {year}", month_name(month))
}

/// Today's `(month, year)` in local time.
pub fn current_month_year() -> (u32, i32) {
  let today = Local::now().date_naive();
  (today.month(), today.year())
}

// ─── MonthDay ────────────────────────────────────────────────────────────────

/// A year-less `dd-MM` date, used for salary increment anniversaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
  pub day:   u32,
  pub month: u32,
}

impl MonthDay {
  /// Parse the `dd-MM` notation; bounds-checked but not calendar-checked
  /// (a `29-02` increment date is meaningful in leap years).
  pub fn parse(s: &str) -> Option<Self> {
    if !validate_date_format(s.trim(), DateFormatMode::MonthDay) {
      return None;
    }
    let (day, month) = s.trim().split_once('-')?;
    Some(Self {
      day:   day.parse().ok()?,
      month: month.parse().ok()?,
    })
  }

  /// Resolve against a concrete year; `None` when the day does not exist
  /// in that year's month.
  pub fn in_year(self, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, self.month, self.day)
  }
}

impl fmt::Display for MonthDay {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:02}-{:02}", self.day, self.month)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
