//! Error types for `sevaka-core`.
//!
//! Malformed input and not-found lookups are expressed as `Option`/flag
//! returns, not errors; the variants here cover invariant violations on
//! mutations only.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("employee number already in use: {0}")]
  DuplicateEmployeeNumber(String),

  #[error("employee not found: {0}")]
  EmployeeNotFound(Uuid),

  #[error("employee number is immutable once assigned")]
  EmployeeNumberImmutable,

  #[error("month out of range: {0}")]
  MonthOutOfRange(u32),

  #[error("day {day} out of range for {month:02}-{year}")]
  DayOutOfRange { day: u32, month: u32, year: i32 },

  #[error("leave range ends before it starts: {start} to {end}")]
  InvalidDateRange { start: NaiveDate, end: NaiveDate },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
