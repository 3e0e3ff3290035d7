//! Employee list queries: multi-field filtering, type-aware sorting,
//! pagination, and the directory that owns the employee collection.
//!
//! The query functions are pure views over `&[Employee]`; the list UIs
//! call them on every filter or sort change and render the returned page.

mod directory;
mod filter;
mod paginate;
mod sort;

pub use directory::EmployeeDirectory;
pub use filter::{AgeRange, EmployeeFilter, filter_employees};
pub use paginate::{Page, paginate};
pub use sort::{SortDirection, SortField, sort_employees};

// ─── Shared test helpers ─────────────────────────────────────────────────────
