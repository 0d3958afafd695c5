//! The runtime record for one customer request.

use sq_core::{DeskId, Minutes, TicketCode, TransactionId};

/// A customer's request and its progress through one service point.
///
/// # Ownership
///
/// Exactly one collection holds a record at any time: the point's waiting
/// line while queued, the serving desk while in service, the point's history
/// after completion.  Records move between them; they are never cloned into
/// two homes, so "no customer is silently lost" is enforced by the type
/// system rather than by bookkeeping.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomerRecord {
    /// Opaque identity string (e.g. a national ID number).
    pub identity: String,

    /// Display name.
    pub name: String,

    /// Requested transaction types in selection order.  Repeats allowed — a
    /// customer may request the same transaction twice.
    pub transactions: Vec<TransactionId>,

    /// Unique ticket code, assigned exactly once at enqueue.
    pub ticket: TicketCode,

    /// Total service time — the sum of the requested transactions' durations.
    pub service_minutes: Minutes,

    /// While queued: the current lane-formula wait estimate.  From the moment
    /// service starts: the measured wait (`point clock − enqueued_at`).
    pub wait_minutes: Minutes,

    /// Point-clock reading when this record entered the waiting line.
    pub enqueued_at: Minutes,

    /// The desk that completed this customer.  `None` until completion.
    pub served_by: Option<DeskId>,
}
