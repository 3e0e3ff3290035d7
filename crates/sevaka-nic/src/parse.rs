//! NIC digit-group decoder.
//!
//! Pipeline:
//!   raw &str
//!     └─ clean()                    → stripped, upper-cased
//!          └─ split_old()/split_new() → digit groups
//!               └─ decode()           → NicInfo

use chrono::{Datelike, NaiveDate};
use sevaka_core::{calendar, employee::Gender};

use crate::{NicFormat, NicInfo};

// ─── Cleaning ────────────────────────────────────────────────────────────────

/// Strip all whitespace and upper-case the terminal letter.
pub(crate) fn clean(nic: &str) -> String {
  nic
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect::<String>()
    .to_uppercase()
}

// ─── Digit groups ────────────────────────────────────────────────────────────

/// The groups of an old-format NIC: 2-digit year, 3-digit day-of-year
/// (gender offset intact), 3-digit serial, check digit, terminal `V`/`X`.
struct OldGroups<'a> {
  yy:      u32,
  ddd:     u32,
  /// The raw day-of-year digits, zero padding preserved for re-encoding.
  ddd_raw: &'a str,
  serial:  &'a str,
  check:   char,
}

fn split_old(clean: &str) -> Option<OldGroups<'_>> {
  if clean.len() != 10 || !clean.is_ascii() {
    return None;
  }
  let digits = &clean[..9];
  if !digits.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  let letter = clean.as_bytes()[9];
  if letter != b'V' && letter != b'X' {
    return None;
  }
  Some(OldGroups {
    yy:      digits[..2].parse().ok()?,
    ddd:     digits[2..5].parse().ok()?,
    ddd_raw: &digits[2..5],
    serial:  &digits[5..8],
    check:   digits.as_bytes()[8] as char,
  })
}

/// The groups of a new-format NIC: 4-digit year, 3-digit day-of-year,
/// 4-digit serial (the first three are reported as the serial), check
/// digit.
struct NewGroups<'a> {
  yyyy:   i32,
  ddd:    u32,
  serial: &'a str,
  check:  char,
}

fn split_new(clean: &str) -> Option<NewGroups<'_>> {
  if clean.len() != 12 || !clean.bytes().all(|b| b.is_ascii_digit()) {
    return None;
  }
  Some(NewGroups {
    yyyy:   clean[..4].parse().ok()?,
    ddd:    clean[4..7].parse().ok()?,
    serial: &clean[7..10],
    check:  clean.as_bytes()[11] as char,
  })
}

// ─── Decoding rules ──────────────────────────────────────────────────────────

/// Map a 2-digit year onto the most plausible century for a living person:
/// at or below the current year's last two digits means the current
/// century, above means the previous one.
///
/// This is a heuristic, not an inverse: a holder more than about a hundred
/// years old is silently placed a century late. Kept verbatim as the
/// documented convention of the old format.
pub(crate) fn resolve_century(two_digit_year: u32, today: NaiveDate) -> i32 {
  let current_year = today.year();
  let current_century = current_year / 100 * 100;
  if two_digit_year as i32 <= current_year % 100 {
    current_century + two_digit_year as i32
  } else {
    current_century - 100 + two_digit_year as i32
  }
}

/// Remove the female offset: a raw day-of-year above 500 encodes Female
/// with the true ordinal day at `raw - 500`.
fn split_gender(raw_day: u32) -> (Gender, u32) {
  if raw_day > 500 {
    (Gender::Female, raw_day - 500)
  } else {
    (Gender::Male, raw_day)
  }
}

/// Day-of-year bounds: `1..=365`, or 366 in a leap year. Routed through
/// the shared calendar predicate.
pub(crate) fn is_valid_day_of_year(day: u32, year: i32) -> bool {
  let max = if calendar::is_leap_year(year) { 366 } else { 365 };
  (1..=max).contains(&day)
}

// ─── Decoder ─────────────────────────────────────────────────────────────────

pub(crate) fn decode(nic: &str, today: NaiveDate) -> NicInfo {
  let clean = clean(nic);

  if let Some(groups) = split_old(&clean) {
    let birth_year = resolve_century(groups.yy, today);
    let (gender, day_of_year) = split_gender(groups.ddd);
    return NicInfo {
      is_valid:    is_valid_day_of_year(day_of_year, birth_year),
      format:      NicFormat::Old,
      birth_year:  Some(birth_year),
      day_of_year: Some(day_of_year),
      gender:      Some(gender),
      serial:      Some(groups.serial.to_string()),
      check_digit: Some(groups.check),
    };
  }

  if let Some(groups) = split_new(&clean) {
    let (gender, day_of_year) = split_gender(groups.ddd);
    return NicInfo {
      is_valid:    is_valid_day_of_year(day_of_year, groups.yyyy),
      format:      NicFormat::New,
      birth_year:  Some(groups.yyyy),
      day_of_year: Some(day_of_year),
      gender:      Some(gender),
      serial:      Some(groups.serial.to_string()),
      check_digit: Some(groups.check),
    };
  }

  NicInfo::invalid()
}

/// Re-encode an old-format NIC as the 12-digit form: 4-digit year, the
/// original day-of-year digits (gender offset intact), a leading zero to
/// widen the serial to four digits, and the check digit. The terminal
/// letter is dropped.
pub(crate) fn convert_old_to_new(nic: &str, today: NaiveDate) -> Option<String> {
  let clean = clean(nic);
  let groups = split_old(&clean)?;
  let birth_year = resolve_century(groups.yy, today);
  Some(format!(
    "{birth_year}{}0{}{}",
    groups.ddd_raw, groups.serial, groups.check
  ))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn today() -> NaiveDate { NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() }

  // ── Shape ───────────────────────────────────────────────────────────────

  #[test]
  fn old_format_male() {
    let info = decode("851234567V", today());
    assert!(info.is_valid);
    assert_eq!(info.format, NicFormat::Old);
    assert_eq!(info.birth_year, Some(1985));
    assert_eq!(info.day_of_year, Some(123));
    assert_eq!(info.gender, Some(Gender::Male));
    assert_eq!(info.serial.as_deref(), Some("456"));
    assert_eq!(info.check_digit, Some('7'));
  }

  #[test]
  fn old_format_female_offset_removed() {
    let info = decode("856234567V", today());
    assert!(info.is_valid);
    assert_eq!(info.gender, Some(Gender::Female));
    // Raw 623 minus the 500 offset.
    assert_eq!(info.day_of_year, Some(123));
  }

  #[test]
  fn old_format_accepts_x_terminal_and_whitespace() {
    let info = decode(" 85 123 456 7x ", today());
    assert!(info.is_valid);
    assert_eq!(info.format, NicFormat::Old);
  }

  #[test]
  fn new_format_decodes_four_digit_serial_as_three() {
    let info = decode("199015600121", today());
    assert!(info.is_valid);
    assert_eq!(info.format, NicFormat::New);
    assert_eq!(info.birth_year, Some(1990));
    assert_eq!(info.day_of_year, Some(156));
    assert_eq!(info.gender, Some(Gender::Male));
    assert_eq!(info.serial.as_deref(), Some("001"));
    assert_eq!(info.check_digit, Some('1'));
  }

  #[test]
  fn new_format_female() {
    let info = decode("199065600121", today());
    assert!(info.is_valid);
    assert_eq!(info.gender, Some(Gender::Female));
    assert_eq!(info.day_of_year, Some(156));
  }

  #[test]
  fn rejects_malformed_shapes() {
    for nic in [
      "",
      "12345",
      "851234567Z",
      "85123456AV",
      "8512345678",
      "19901560012",
      "1990156001211",
      "19901560012a",
    ] {
      let info = decode(nic, today());
      assert!(!info.is_valid, "{nic:?} must be invalid");
      assert_eq!(info.format, NicFormat::Invalid, "{nic:?}");
      assert_eq!(info.birth_year, None);
    }
  }

  // ── Day-of-year bounds ──────────────────────────────────────────────────

  #[test]
  fn day_of_year_zero_is_invalid_but_shape_reported() {
    let info = decode("850004567V", today());
    assert!(!info.is_valid);
    assert_eq!(info.format, NicFormat::Old);
    assert_eq!(info.day_of_year, Some(0));
  }

  #[test]
  fn day_366_requires_leap_year() {
    // 96 resolves to 1996 (leap) as of 2024; 97 to 1997.
    assert!(decode("963664567V", today()).is_valid);
    assert!(!decode("973664567V", today()).is_valid);
  }

  #[test]
  fn day_500_is_male_and_out_of_bounds() {
    let info = decode("855004567V", today());
    assert_eq!(info.gender, Some(Gender::Male));
    assert_eq!(info.day_of_year, Some(500));
    assert!(!info.is_valid);
  }

  #[test]
  fn day_501_is_female_day_one() {
    let info = decode("855014567V", today());
    assert_eq!(info.gender, Some(Gender::Female));
    assert_eq!(info.day_of_year, Some(1));
    assert!(info.is_valid);
  }

  // ── Century heuristic ───────────────────────────────────────────────────

  #[test]
  fn century_pivots_on_current_year() {
    let info = decode("241234567V", today());
    assert_eq!(info.birth_year, Some(2024));
    let info = decode("251234567V", today());
    assert_eq!(info.birth_year, Some(1925));
    let info = decode("001234567V", today());
    assert_eq!(info.birth_year, Some(2000));
  }

  #[test]
  fn century_resolution_is_date_dependent() {
    let before = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let after = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    assert_eq!(resolve_century(25, before), 1925);
    assert_eq!(resolve_century(25, after), 2025);
  }

  // ── Conversion ──────────────────────────────────────────────────────────

  #[test]
  fn converts_old_to_new_with_padded_serial() {
    assert_eq!(
      convert_old_to_new("851234567V", today()).as_deref(),
      Some("198512304567")
    );
    // Leading zeros in the day group survive re-encoding.
    assert_eq!(
      convert_old_to_new("850054567V", today()).as_deref(),
      Some("198500504567")
    );
  }

  #[test]
  fn convert_rejects_non_old_shapes() {
    assert_eq!(convert_old_to_new("199015600121", today()), None);
    assert_eq!(convert_old_to_new("junk", today()), None);
  }
}
