//! Ticket codes and the issuing registry.
//!
//! # Determinism strategy
//!
//! The registry draws codes from its own seeded `SmallRng`: the same seed
//! always produces the same ticket sequence, which keeps whole-simulation
//! runs reproducible.  Uniqueness is enforced by an issued-set held inside
//! the registry — an explicit object owned by the simulation root, never
//! process-global state, so tests can construct and discard registries
//! freely.
//!
//! # Code format
//!
//! `NNN-NNNN`: a 3-digit block (100–999) and a 4-digit block (1000–9999),
//! drawn independently and uniformly.  Codes are never reused within a run,
//! even after the holding customer has left every collection.

use std::fmt;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::error::{TicketError, TicketResult};

/// Draws per `issue()` before giving up with `ExhaustedRetries`.  Bounds an
/// otherwise-unbounded rejection loop against a saturated code space.
const MAX_ATTEMPTS: u32 = 100;

// ── TicketCode ────────────────────────────────────────────────────────────────

/// A formatted unique ticket code, e.g. `"347-2091"`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketCode(String);

impl TicketCode {
    /// The formatted code text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn format(block3: u16, block4: u16) -> TicketCode {
        TicketCode(format!("{block3:03}-{block4:04}"))
    }
}

impl fmt::Display for TicketCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── TicketRegistry ────────────────────────────────────────────────────────────

/// Issues globally-unique ticket codes for the lifetime of one run.
///
/// Owned by the simulation root; per spec there is exactly one registry per
/// run, shared by every service point.
#[derive(Debug)]
pub struct TicketRegistry {
    rng:    SmallRng,
    issued: FxHashSet<TicketCode>,
}

impl TicketRegistry {
    /// Create an empty registry with a deterministic RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng:    SmallRng::seed_from_u64(seed),
            issued: FxHashSet::default(),
        }
    }

    /// Draw a fresh, never-before-issued ticket code.
    ///
    /// Rejection-samples up to [`MAX_ATTEMPTS`] draws; each draw picks both
    /// blocks uniformly and independently.
    pub fn issue(&mut self) -> TicketResult<TicketCode> {
        for _ in 0..MAX_ATTEMPTS {
            let block3: u16 = self.rng.gen_range(100..=999);
            let block4: u16 = self.rng.gen_range(1000..=9999);
            let code = TicketCode::format(block3, block4);
            if self.issued.insert(code.clone()) {
                return Ok(code);
            }
        }
        Err(TicketError::ExhaustedRetries {
            attempts: MAX_ATTEMPTS,
        })
    }

    /// `true` if `code` has been issued during this run.
    pub fn is_issued(&self, code: &TicketCode) -> bool {
        self.issued.contains(code)
    }

    /// Number of codes issued so far.
    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}
