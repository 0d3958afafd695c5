//! Engine observer trait for progress reporting and data collection.
//!
//! The engine itself never prints or logs; everything user-facing goes
//! through these hooks.

use sq_core::{DeskId, Minutes, PointId, TicketCode};

use crate::customer::CustomerRecord;

/// Callbacks fired by [`Sim`][crate::Sim] operations.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — completion printer
///
/// ```rust,ignore
/// struct CompletionPrinter;
///
/// impl QueueObserver for CompletionPrinter {
///     fn on_completed(&mut self, point: PointId, customer: &CustomerRecord, clock: Minutes) {
///         println!("{clock}: {} done at {point}", customer.ticket);
///     }
/// }
/// ```
pub trait QueueObserver {
    /// A customer was ticketed and entered the waiting line.
    fn on_assigned(&mut self, _point: PointId, _ticket: &TicketCode, _estimate: Minutes) {}

    /// A customer was pulled onto a desk and service began.
    fn on_service_started(&mut self, _point: PointId, _desk: DeskId, _ticket: &TicketCode) {}

    /// A customer finished service and moved to history.  `clock` is the
    /// point clock at completion time.
    fn on_completed(&mut self, _point: PointId, _customer: &CustomerRecord, _clock: Minutes) {}

    /// A time step finished.  `completed` is the number of customers that
    /// finished during it.
    fn on_advanced(&mut self, _point: PointId, _clock: Minutes, _completed: usize) {}
}

/// A [`QueueObserver`] that does nothing.  Use when calling engine
/// operations without needing callbacks.
pub struct NoopObserver;

impl QueueObserver for NoopObserver {}
