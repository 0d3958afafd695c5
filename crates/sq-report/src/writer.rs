//! The `ReportWriter` trait implemented by backend writers.

use crate::{CompletionRow, PointSummaryRow, ReportResult};

/// Trait implemented by report backends (CSV today; the interface leaves
/// room for others).
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`ReportObserver::take_error`][crate::ReportObserver::take_error].
pub trait ReportWriter {
    /// Write one served-customer row.
    fn write_completion(&mut self, row: &CompletionRow) -> ReportResult<()>;

    /// Write one point-snapshot row.
    fn write_summary(&mut self, row: &PointSummaryRow) -> ReportResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> ReportResult<()>;
}
