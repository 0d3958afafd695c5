//! `ReportObserver<W>` — bridges `QueueObserver` to a `ReportWriter`.

use sq_core::{DeskId, Minutes, PointId};
use sq_engine::{CustomerRecord, PointState, QueueObserver};
use sq_stats::point_stats;

use crate::row::{CompletionRow, PointSummaryRow};
use crate::writer::ReportWriter;
use crate::ReportError;

/// A [`QueueObserver`] that writes a completion row for every served
/// customer, plus point summaries on demand via [`snapshot`][Self::snapshot].
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct ReportObserver<W: ReportWriter> {
    writer:     W,
    last_error: Option<ReportError>,
}

impl<W: ReportWriter> ReportObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Write a summary row for the current state of `point`.
    pub fn snapshot(&mut self, state: &PointState) {
        let stats = point_stats(state);
        let row = PointSummaryRow {
            point:       state.id().0,
            clock:       state.clock().0,
            waiting:     state.waiting_count() as u64,
            serving:     state.serving_count() as u64,
            served:      stats.total_served as u64,
            avg_wait:    stats.avg_wait,
            avg_service: stats.avg_service,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
    }

    /// Flush the writer and surface any stored error.
    pub fn close(mut self) -> Result<W, ReportError> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.last_error {
            Some(e) => Err(e),
            None => Ok(self.writer),
        }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// so far succeeded.
    pub fn take_error(&mut self) -> Option<ReportError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::ReportResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: ReportWriter> QueueObserver for ReportObserver<W> {
    fn on_completed(&mut self, point: PointId, customer: &CustomerRecord, clock: Minutes) {
        let row = CompletionRow {
            point:           point.0,
            desk:            customer.served_by.unwrap_or(DeskId::INVALID).0,
            ticket:          customer.ticket.to_string(),
            identity:        customer.identity.clone(),
            wait_minutes:    customer.wait_minutes.0,
            service_minutes: customer.service_minutes.0,
            completed_at:    clock.0,
        };
        let result = self.writer.write_completion(&row);
        self.store_err(result);
    }
}
