//! `sq-report` — CSV reporting for simulation runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`row`]      | `CompletionRow`, `PointSummaryRow` plain data rows     |
//! | [`writer`]   | The `ReportWriter` trait                               |
//! | [`csv`]      | `CsvWriter` backend (two files in an output dir)       |
//! | [`observer`] | `ReportObserver<W>` — bridges `QueueObserver` to a writer |
//! | [`error`]    | `ReportError`, `ReportResult<T>`                       |
//!
//! The engine performs no rendering or file I/O of its own; this crate
//! consumes its read-only snapshots and observer events.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{ReportError, ReportResult};
pub use observer::ReportObserver;
pub use row::{CompletionRow, PointSummaryRow};
pub use writer::ReportWriter;
