//! `sq-core` — foundational types for the `rust_sq` service-queue simulation.
//!
//! This crate is a dependency of every other `sq-*` crate.  It intentionally
//! has no `sq-*` dependencies and minimal external ones (only `rand`,
//! `rustc-hash`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `CompanyId`, `PointId`, `DeskId`, `TransactionId`         |
//! | [`minutes`] | `Minutes` — the integer simulation time unit              |
//! | [`ticket`]  | `TicketCode`, `TicketRegistry`                            |
//! | [`error`]   | `TicketError`, `TicketResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.           |

pub mod error;
pub mod ids;
pub mod minutes;
pub mod ticket;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{TicketError, TicketResult};
pub use ids::{CompanyId, DeskId, PointId, TransactionId};
pub use minutes::Minutes;
pub use ticket::{TicketCode, TicketRegistry};
