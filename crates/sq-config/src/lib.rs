//! `sq-config` — JSON scenario loader.
//!
//! A scenario file defines the catalog (companies → points → desks,
//! companies → transaction types) and, optionally, an initial state: desks
//! that start active and customers that already wait, with a quantity
//! multiplier on repeated transaction references.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`doc`]    | serde document model (`ScenarioDoc` and friends)           |
//! | [`loader`] | `load_scenario`, `load_scenario_reader`                    |
//! | [`error`]  | `ConfigError`, `ConfigResult<T>`                           |
//!
//! Every cross-reference in the document is validated against the catalog
//! built from the same document; the first dangling reference aborts the
//! load before the engine is touched.

pub mod doc;
pub mod error;
pub mod loader;


pub use doc::ScenarioDoc;
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_scenario, load_scenario_reader};
