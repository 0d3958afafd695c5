use sq_core::{DeskId, PointId, TicketError, TransactionId};
use thiserror::Error;

/// Engine failures.  All are recoverable by the caller and none leave the
/// simulation in a half-mutated state: validation runs before the first
/// mutation, and ticket issuance is the only fallible step after it.
///
/// State conflicts (double activation, completing an empty desk) are *not*
/// errors — those operations return `Ok(false)`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("service point {0} not found")]
    UnknownPoint(PointId),

    #[error("desk {desk} not found at point {point}")]
    UnknownDesk { desk: DeskId, point: PointId },

    /// A customer with zero transactions has nothing to be served for;
    /// callers must reject this before it reaches the engine, and the engine
    /// rejects it again.
    #[error("customer selected no transactions")]
    EmptySelection,

    #[error("transaction {tx} is not offered at point {point}")]
    TransactionNotOffered { tx: TransactionId, point: PointId },

    #[error("ticket issuance failed: {0}")]
    TicketIssuance(#[from] TicketError),
}

pub type EngineResult<T> = Result<T, EngineError>;
