//! `sq-catalog` — the immutable service catalog.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`catalog`] | `Catalog`, `Company`, `ServicePoint`, `Desk`, `TransactionType`, `CatalogBuilder` |
//! | [`error`]   | `CatalogError`, `CatalogResult<T>`                        |
//!
//! The catalog is loaded once (by `sq-config` or by hand via
//! [`CatalogBuilder`]) and is read-only for the rest of the run.  Runtime
//! queue state lives in `sq-engine`, keyed by the IDs defined here.

pub mod catalog;
pub mod error;


pub use catalog::{Catalog, CatalogBuilder, Company, Desk, ServicePoint, TransactionType};
pub use error::{CatalogError, CatalogResult};
