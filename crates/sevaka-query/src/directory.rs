//! The employee directory: owner of the collection and of the
//! derived-field invariant.
//!
//! `age` and `retired_date` are recomputed here after every write, so no
//! edit path can leave them stale relative to `date_of_birth`.

use chrono::{Local, NaiveDate, Utc};
use sevaka_core::{
  Error, Result,
  employee::{self, Employee},
};
use uuid::Uuid;

use crate::{
  EmployeeFilter, Page, SortDirection, SortField, filter_employees, paginate,
  sort_employees,
};

fn local_today() -> NaiveDate { Local::now().date_naive() }

#[derive(Debug, Default)]
pub struct EmployeeDirectory {
  employees: Vec<Employee>,
}

impl EmployeeDirectory {
  pub fn new() -> Self { Self::default() }

  /// Seed from the collection supplied by the persistence layer.
  pub fn with_employees(employees: Vec<Employee>) -> Self {
    Self { employees }
  }

  // ── Writes ──────────────────────────────────────────────────────────────

  /// Add a new employee. A blank employee number is generated; a taken
  /// one is rejected. Derived fields are recomputed before the record is
  /// stored.
  pub fn add(&mut self, employee: Employee) -> Result<&Employee> {
    self.add_as_of(employee, local_today())
  }

  /// [`Self::add`] with an explicit current date.
  pub fn add_as_of(
    &mut self,
    mut employee: Employee,
    today: NaiveDate,
  ) -> Result<&Employee> {
    if employee.employee_number.trim().is_empty() {
      employee.employee_number =
        employee::generate_employee_number(Utc::now());
    }
    if self.by_number(&employee.employee_number).is_some() {
      return Err(Error::DuplicateEmployeeNumber(employee.employee_number));
    }

    employee.refresh_derived(today);
    tracing::debug!(
      id = %employee.id,
      number = %employee.employee_number,
      "employee added"
    );
    self.employees.push(employee);
    Ok(self.employees.last().expect("pushed above"))
  }

  /// Edit in place through a closure. The employee number is immutable;
  /// an edit that changes it is rejected wholesale, and derived fields
  /// are recomputed after every accepted edit.
  pub fn update(
    &mut self,
    id: Uuid,
    edit: impl FnOnce(&mut Employee),
  ) -> Result<&Employee> {
    self.update_as_of(id, local_today(), edit)
  }

  /// [`Self::update`] with an explicit current date.
  pub fn update_as_of(
    &mut self,
    id: Uuid,
    today: NaiveDate,
    edit: impl FnOnce(&mut Employee),
  ) -> Result<&Employee> {
    let Some(index) = self.employees.iter().position(|e| e.id == id) else {
      return Err(Error::EmployeeNotFound(id));
    };

    // Edit a copy so a rejected edit leaves the stored record untouched.
    let mut edited = self.employees[index].clone();
    edit(&mut edited);
    if edited.employee_number != self.employees[index].employee_number {
      return Err(Error::EmployeeNumberImmutable);
    }
    edited.id = id;
    edited.refresh_derived(today);
    edited.updated_at = Utc::now();

    self.employees[index] = edited;
    tracing::debug!(%id, "employee updated");
    Ok(&self.employees[index])
  }

  /// Remove by id; `false` when no such employee exists.
  pub fn remove(&mut self, id: Uuid) -> bool {
    let before = self.employees.len();
    self.employees.retain(|e| e.id != id);
    let removed = self.employees.len() < before;
    if removed {
      tracing::debug!(%id, "employee removed");
    }
    removed
  }

  // ── Reads ───────────────────────────────────────────────────────────────

  pub fn get(&self, id: Uuid) -> Option<&Employee> {
    self.employees.iter().find(|e| e.id == id)
  }

  pub fn by_number(&self, number: &str) -> Option<&Employee> {
    self.employees.iter().find(|e| e.employee_number == number)
  }

  pub fn employees(&self) -> &[Employee] { &self.employees }

  pub fn len(&self) -> usize { self.employees.len() }

  pub fn is_empty(&self) -> bool { self.employees.is_empty() }

  /// Distinct trimmed ministry names, sorted, for the filter dropdown.
  pub fn unique_ministries(&self) -> Vec<String> {
    let mut ministries: Vec<String> = self
      .employees
      .iter()
      .map(|e| e.ministry.trim().to_string())
      .collect();
    ministries.sort();
    ministries.dedup();
    ministries
  }

  // ── Composed query ──────────────────────────────────────────────────────

  /// Filter, sort, and paginate in one call for the list views.
  pub fn query(
    &self,
    filter: &EmployeeFilter,
    search: &str,
    sort: Option<(SortField, SortDirection)>,
    page: usize,
    page_size: usize,
  ) -> Page<'_> {
    let mut matched = filter_employees(&self.employees, filter, search);
    if let Some((field, direction)) = sort {
      sort_employees(&mut matched, field, direction);
    }
    paginate(&matched, page, page_size)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use sevaka_core::policy::DEFAULT_PAGE_SIZE;

  use super::*;
  use crate::test_helpers::employee;

  fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
  }

  // ── Add ─────────────────────────────────────────────────────────────────

  #[test]
  fn add_generates_number_when_blank() {
    let mut directory = EmployeeDirectory::new();
    let added = directory
      .add_as_of(employee("", "A. B. Perera"), d(2024, 6, 1))
      .unwrap();
    assert!(added.employee_number.starts_with("EMP"));
    assert_eq!(added.employee_number.len(), 12);
  }

  #[test]
  fn add_rejects_duplicate_numbers() {
    let mut directory = EmployeeDirectory::new();
    directory
      .add_as_of(employee("EMP001", "First"), d(2024, 6, 1))
      .unwrap();

    let result =
      directory.add_as_of(employee("EMP001", "Second"), d(2024, 6, 1));
    assert!(matches!(result, Err(Error::DuplicateEmployeeNumber(_))));
    assert_eq!(directory.len(), 1);
  }

  #[test]
  fn add_derives_age_and_retirement() {
    let mut directory = EmployeeDirectory::new();
    let mut new = employee("EMP001", "A. B. Perera");
    new.date_of_birth = Some(d(1990, 6, 15));

    let added = directory.add_as_of(new, d(2024, 6, 14)).unwrap();
    assert_eq!(added.age, Some(33));
    assert_eq!(added.retired_date, Some(d(2050, 6, 15)));
  }

  // ── Update ──────────────────────────────────────────────────────────────

  #[test]
  fn update_recomputes_derived_fields() {
    let mut directory = EmployeeDirectory::new();
    let id = directory
      .add_as_of(employee("EMP001", "A. B. Perera"), d(2024, 6, 1))
      .unwrap()
      .id;

    let updated = directory
      .update_as_of(id, d(2024, 6, 1), |e| {
        e.date_of_birth = Some(d(1980, 1, 10));
      })
      .unwrap();
    assert_eq!(updated.age, Some(44));
    assert_eq!(updated.retired_date, Some(d(2040, 1, 10)));

    // Stale derived values supplied by the edit are overwritten.
    let updated = directory
      .update_as_of(id, d(2024, 6, 1), |e| {
        e.age = Some(99);
      })
      .unwrap();
    assert_eq!(updated.age, Some(44));
  }

  #[test]
  fn update_rejects_number_change_wholesale() {
    let mut directory = EmployeeDirectory::new();
    let id = directory
      .add_as_of(employee("EMP001", "A. B. Perera"), d(2024, 6, 1))
      .unwrap()
      .id;

    let result = directory.update_as_of(id, d(2024, 6, 1), |e| {
      e.employee_number = "EMP999".to_string();
      e.full_name = "Changed".to_string();
    });
    assert!(matches!(result, Err(Error::EmployeeNumberImmutable)));

    // The rejected edit left nothing behind.
    let stored = directory.get(id).unwrap();
    assert_eq!(stored.employee_number, "EMP001");
    assert_eq!(stored.full_name, "A. B. Perera");
  }

  #[test]
  fn update_unknown_id_errors() {
    let mut directory = EmployeeDirectory::new();
    let result =
      directory.update_as_of(Uuid::new_v4(), d(2024, 6, 1), |_| {});
    assert!(matches!(result, Err(Error::EmployeeNotFound(_))));
  }

  // ── Remove and lookups ──────────────────────────────────────────────────

  #[test]
  fn remove_and_lookup() {
    let mut directory = EmployeeDirectory::new();
    let id = directory
      .add_as_of(employee("EMP001", "A. B. Perera"), d(2024, 6, 1))
      .unwrap()
      .id;

    assert!(directory.get(id).is_some());
    assert!(directory.by_number("EMP001").is_some());
    assert!(directory.by_number("EMP999").is_none());

    assert!(directory.remove(id));
    assert!(!directory.remove(id));
    assert!(directory.get(id).is_none());
    assert!(directory.is_empty());
  }

  #[test]
  fn unique_ministries_trimmed_and_sorted() {
    let mut directory = EmployeeDirectory::new();
    let mut first = employee("EMP001", "First");
    first.ministry = " Ministry of Health ".to_string();
    let mut second = employee("EMP002", "Second");
    second.ministry = "Ministry of Agriculture".to_string();
    let mut third = employee("EMP003", "Third");
    third.ministry = "Ministry of Health".to_string();

    for e in [first, second, third] {
      directory.add_as_of(e, d(2024, 6, 1)).unwrap();
    }

    assert_eq!(directory.unique_ministries(), [
      "Ministry of Agriculture",
      "Ministry of Health"
    ]);
  }

  // ── Composed query ──────────────────────────────────────────────────────

  #[test]
  fn query_composes_filter_sort_and_page() {
    let mut directory = EmployeeDirectory::new();
    for (number, name) in
      [("EMP001", "Silva"), ("EMP002", "Bandara"), ("EMP003", "Perera")]
    {
      directory
        .add_as_of(employee(number, name), d(2024, 6, 1))
        .unwrap();
    }

    let page = directory.query(
      &EmployeeFilter::default(),
      "",
      Some((SortField::FullName, SortDirection::Ascending)),
      1,
      2,
    );
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items[0].full_name, "Bandara");
    assert_eq!(page.items[1].full_name, "Perera");

    let page = directory.query(
      &EmployeeFilter::default(),
      "silva",
      None,
      1,
      DEFAULT_PAGE_SIZE,
    );
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].full_name, "Silva");
  }
}
