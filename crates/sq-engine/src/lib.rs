//! `sq-engine` — the queueing and desk-assignment simulation engine.
//!
//! # What happens on each operation
//!
//! ```text
//! assign(point, customer):
//!   ① Validate  — point exists, selection non-empty, transactions offered here.
//!   ② Ticket    — draw a unique code from the run-wide registry.
//!   ③ Estimate  — round-robin virtual-lane wait estimate for the new arrival.
//!   ④ Enqueue   — append to the waiting line's tail (FIFO).
//!   ⑤ Seat      — if an active desk is idle, pull the line head onto it.
//!
//! advance(point, minutes):
//!   ① Clock     — the point clock moves forward by `minutes`.
//!   ② Drain     — every occupied active desk, in desk order, loses `minutes`;
//!                 desks reaching zero complete their occupant to history and
//!                 pull the next head of the line (fresh counter, no carry-over).
//!   ③ Estimate  — waiting-line estimates are recomputed with the same lane
//!                 formula used at enqueue time.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`customer`] | `CustomerRecord`                                         |
//! | [`point`]    | `DeskState`, `PointState` (line, desks, history, clock)  |
//! | [`assign`]   | the virtual-lane wait-estimation formula                 |
//! | [`sim`]      | `Sim` root, `AssignReceipt`, all public operations       |
//! | [`observer`] | `QueueObserver`, `NoopObserver`                          |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                         |

pub mod assign;
pub mod customer;
pub mod error;
pub mod observer;
pub mod point;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use customer::CustomerRecord;
pub use error::{EngineError, EngineResult};
pub use observer::{NoopObserver, QueueObserver};
pub use point::{DeskState, PointState};
pub use sim::{AssignReceipt, Sim};
