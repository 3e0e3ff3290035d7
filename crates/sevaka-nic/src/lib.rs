//! Sri Lankan National Identity Card (NIC) codec.
//!
//! Decodes both NIC generations: the old 10-character form (2-digit year,
//! 3-digit day-of-year, 3-digit serial, check digit, terminal `V`/`X`) and
//! the new 12-digit form (4-digit year, 3-digit day-of-year, 4-digit
//! serial, check digit). A raw day-of-year above 500 marks the holder
//! female, with the true ordinal day at `raw - 500`.
//!
//! # Quick start
//!
//! ```
//! use sevaka_nic::{NicFormat, validate};
//!
//! let info = validate("851234567V");
//! assert_eq!(info.format, NicFormat::Old);
//! assert!(info.is_valid);
//! ```
//!
//! Invalid input never panics or errors: every function reports failure
//! through `is_valid` or an empty `Option`, and callers decide how to
//! surface it.
//!
//! Old-format decoding depends on today's date (the 2-digit year is mapped
//! to a century relative to the current year), so every such operation has
//! an `_as_of` variant taking an explicit date for deterministic use.

mod parse;

use chrono::{Local, NaiveDate};
use sevaka_core::{calendar, employee::Gender};

// ─── Public types ────────────────────────────────────────────────────────────

/// Which NIC generation an input matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NicFormat {
  Old,
  New,
  Invalid,
}

/// The decoded fields of an NIC. `is_valid` can be `false` while the
/// group fields are populated: the shape matched but the day-of-year is
/// out of bounds for the resolved birth year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicInfo {
  pub is_valid:    bool,
  pub format:      NicFormat,
  pub birth_year:  Option<i32>,
  /// True ordinal day, gender offset already removed.
  pub day_of_year: Option<u32>,
  pub gender:      Option<Gender>,
  pub serial:      Option<String>,
  pub check_digit: Option<char>,
}

impl NicInfo {
  pub(crate) fn invalid() -> Self {
    Self {
      is_valid:    false,
      format:      NicFormat::Invalid,
      birth_year:  None,
      day_of_year: None,
      gender:      None,
      serial:      None,
      check_digit: None,
    }
  }
}

// ─── Public API ──────────────────────────────────────────────────────────────

fn today() -> NaiveDate { Local::now().date_naive() }

/// Decode and validate an NIC of either generation.
pub fn validate(nic: &str) -> NicInfo { validate_as_of(nic, today()) }

/// [`validate`] with an explicit current date for century resolution.
pub fn validate_as_of(nic: &str, today: NaiveDate) -> NicInfo {
  parse::decode(nic, today)
}

/// Day-of-year bounds check: `1..=365`, or 366 in a leap year.
pub fn is_valid_day_of_year(day: u32, year: i32) -> bool {
  parse::is_valid_day_of_year(day, year)
}

/// Re-encode an old-format NIC as the 12-digit form; `None` unless the
/// input matches the old shape.
pub fn convert_old_to_new(nic: &str) -> Option<String> {
  convert_old_to_new_as_of(nic, today())
}

/// [`convert_old_to_new`] with an explicit current date.
pub fn convert_old_to_new_as_of(
  nic: &str,
  today: NaiveDate,
) -> Option<String> {
  parse::convert_old_to_new(nic, today)
}

/// Group an NIC for display: `XX XXX XXX XV` for the 10-character form,
/// `XXXX XXX XXXX X` for the 12-digit form, anything else unchanged.
pub fn format_for_display(nic: &str) -> String {
  let clean: String = nic.chars().filter(|c| !c.is_whitespace()).collect();
  match clean.len() {
    10 if clean.is_ascii() => format!(
      "{} {} {} {}",
      &clean[..2],
      &clean[2..5],
      &clean[5..8],
      &clean[8..]
    ),
    12 if clean.is_ascii() => format!(
      "{} {} {} {}",
      &clean[..4],
      &clean[4..7],
      &clean[7..11],
      &clean[11..]
    ),
    _ => nic.to_string(),
  }
}

/// The holder's birth date, by ordinal-day construction from the decoded
/// year and day-of-year. `None` unless the NIC is fully valid.
pub fn birth_date(nic: &str) -> Option<NaiveDate> {
  birth_date_as_of(nic, today())
}

/// [`birth_date`] with an explicit current date.
pub fn birth_date_as_of(nic: &str, today: NaiveDate) -> Option<NaiveDate> {
  let info = validate_as_of(nic, today);
  if !info.is_valid {
    return None;
  }
  calendar::date_from_day_of_year(info.birth_year?, info.day_of_year?)
}

/// The holder's gender. Reported whenever the shape decodes, even if the
/// day-of-year is out of bounds.
pub fn gender(nic: &str) -> Option<Gender> { validate(nic).gender }

/// The holder's age as of today; `None` unless the NIC is fully valid.
pub fn age(nic: &str) -> Option<u32> { age_as_of(nic, today()) }

/// [`age`] with an explicit current date.
pub fn age_as_of(nic: &str, today: NaiveDate) -> Option<u32> {
  birth_date_as_of(nic, today)
    .map(|birth| calendar::calculate_age(birth, today))
}

// ─── Cross-format consistency tests ──────────────────────────────────────────
