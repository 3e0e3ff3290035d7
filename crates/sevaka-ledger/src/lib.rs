//! In-memory attendance and leave administration.
//!
//! The ledger owns the per-employee/per-month attendance records and the
//! leave applications, and derives everything else on demand: monthly
//! summaries, leave balances, and the end-of-month alert. It performs no
//! I/O; the persistence layer seeds it and receives its state back.
//!
//! Single-threaded and synchronous by design. Every operation is a plain
//! function over the in-memory collections; callers serialize mutation
//! through one owner.

mod ledger;
mod summary;

pub use ledger::AttendanceLedger;
pub use summary::summarize;
