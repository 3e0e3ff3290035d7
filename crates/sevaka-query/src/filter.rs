//! Multi-field employee filtering.

use sevaka_core::employee::{Designation, Employee, Gender, SalaryCode};

// ─── Filter shape ────────────────────────────────────────────────────────────

/// Inclusive age bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
  pub min: u32,
  pub max: u32,
}

/// Structured filter; every present field narrows the result further
/// (AND semantics). Text fields match by case-insensitive substring,
/// enumerations by exact value.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
  pub employee_number: Option<String>,
  pub full_name:       Option<String>,
  pub designation:     Option<Designation>,
  pub ministry:        Option<String>,
  pub nic_number:      Option<String>,
  pub gender:          Option<Gender>,
  pub salary_code:     Option<SalaryCode>,
  pub age_range:       Option<AgeRange>,
}

// ─── Filtering ───────────────────────────────────────────────────────────────

fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Free-text search across name, employee number, NIC, designation, and
/// ministry (OR semantics), then the structured fields (AND). An employee
/// with no derivable age passes the age filter rather than being
/// silently excluded.
pub fn filter_employees<'a>(
  employees: &'a [Employee],
  filter: &EmployeeFilter,
  search: &str,
) -> Vec<&'a Employee> {
  let needle = search.trim().to_lowercase();
  employees
    .iter()
    .filter(|e| matches_search(e, &needle) && matches_filter(e, filter))
    .collect()
}

fn matches_search(e: &Employee, needle: &str) -> bool {
  if needle.is_empty() {
    return true;
  }
  e.full_name.to_lowercase().contains(needle)
    || e.employee_number.to_lowercase().contains(needle)
    || e.nic_number.to_lowercase().contains(needle)
    || e.designation.to_string().to_lowercase().contains(needle)
    || e.ministry.to_lowercase().contains(needle)
}

fn matches_filter(e: &Employee, filter: &EmployeeFilter) -> bool {
  if let Some(ref number) = filter.employee_number
    && !contains_ci(&e.employee_number, number)
  {
    return false;
  }
  if let Some(ref name) = filter.full_name
    && !contains_ci(&e.full_name, name)
  {
    return false;
  }
  if let Some(designation) = filter.designation
    && e.designation != designation
  {
    return false;
  }
  if let Some(ref ministry) = filter.ministry
    && !contains_ci(&e.ministry, ministry)
  {
    return false;
  }
  if let Some(ref nic) = filter.nic_number
    && !contains_ci(&e.nic_number, nic)
  {
    return false;
  }
  if let Some(gender) = filter.gender
    && e.gender != gender
  {
    return false;
  }
  if let Some(salary_code) = filter.salary_code
    && e.salary_code != salary_code
  {
    return false;
  }
  if let Some(range) = filter.age_range
    && let Some(age) = e.age
    && !(range.min..=range.max).contains(&age)
  {
    return false;
  }
  true
}

// ─── Tests ───────────────────────────────────────────────────────────────────
