//! Per-service-point runtime state: the waiting line, the desk table, the
//! completion history, and the point clock.
//!
//! # Desk state machine
//!
//! ```text
//! Inactive → Active(idle) → Active(serving) → Active(idle) → …
//! Active(*) → Inactive on deactivation (occupant returns to the line head)
//! ```
//!
//! `Inactive` is both the initial state and a reachable terminal one; desks
//! are never auto-removed.
//!
//! # Invariants held at every public-API boundary
//!
//! - A desk holds an occupant only while active.
//! - No active desk is idle while the waiting line is non-empty
//!   (every mutation ends with a [`fill_idle`][PointState::fill_idle] pass).
//! - `waiting + serving + history == assigned_total` — customers move
//!   between the three homes, they are never dropped.

use std::collections::VecDeque;

use sq_core::{DeskId, Minutes, PointId, TicketCode};

use crate::assign;
use crate::customer::CustomerRecord;

// ── DeskState ─────────────────────────────────────────────────────────────────

/// Runtime state of one service desk.
#[derive(Debug)]
pub struct DeskState {
    id:        DeskId,
    active:    bool,
    occupant:  Option<CustomerRecord>,
    /// Minutes of service left for `occupant`.  Meaningless (kept at zero)
    /// while no occupant is present.
    remaining: Minutes,
}

impl DeskState {
    fn new(id: DeskId) -> Self {
        Self {
            id,
            active:    false,
            occupant:  None,
            remaining: Minutes::ZERO,
        }
    }

    pub fn id(&self) -> DeskId {
        self.id
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// The customer currently in service, if any.
    pub fn occupant(&self) -> Option<&CustomerRecord> {
        self.occupant.as_ref()
    }

    pub fn remaining(&self) -> Minutes {
        self.remaining
    }

    /// Active with no occupant — eligible to pull from the line.
    pub fn is_idle(&self) -> bool {
        self.active && self.occupant.is_none()
    }
}

// ── Outcome of a drain pass ───────────────────────────────────────────────────

/// What changed during one `advance`/completion pass — consumed by `Sim` to
/// fire observer hooks.  History entries appended this pass are the last
/// `completed` elements, in processing order.
pub(crate) struct DrainOutcome {
    pub completed: usize,
    /// `(desk, ticket)` for every customer whose service started this pass.
    pub seated:    Vec<(DeskId, TicketCode)>,
}

// ── PointState ────────────────────────────────────────────────────────────────

/// All mutable queue state for one service point.
///
/// Mutation is crate-internal (driven by [`Sim`][crate::Sim]); reads are
/// public for the presentation, statistics, and reporting layers.
#[derive(Debug)]
pub struct PointState {
    id:             PointId,
    clock:          Minutes,
    waiting:        VecDeque<CustomerRecord>,
    /// Catalog desk order — the deterministic processing order.
    desks:          Vec<DeskState>,
    /// Completed customers, append-only, in completion order.
    history:        Vec<CustomerRecord>,
    assigned_total: u64,
}

impl PointState {
    pub(crate) fn new(id: PointId, desk_ids: &[DeskId]) -> Self {
        Self {
            id,
            clock:          Minutes::ZERO,
            waiting:        VecDeque::new(),
            desks:          desk_ids.iter().map(|&d| DeskState::new(d)).collect(),
            history:        Vec::new(),
            assigned_total: 0,
        }
    }

    // ── Read API ──────────────────────────────────────────────────────────

    pub fn id(&self) -> PointId {
        self.id
    }

    /// The point clock — total minutes this point has been advanced.
    pub fn clock(&self) -> Minutes {
        self.clock
    }

    /// Waiting customers in FIFO order (head first).
    pub fn waiting(&self) -> impl Iterator<Item = &CustomerRecord> {
        self.waiting.iter()
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Completed customers in completion order.
    pub fn history(&self) -> &[CustomerRecord] {
        &self.history
    }

    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    /// Desks in catalog order.
    pub fn desks(&self) -> &[DeskState] {
        &self.desks
    }

    /// Runtime state of one desk, if it belongs to this point.
    pub fn desk(&self, desk: DeskId) -> Option<&DeskState> {
        self.desks.iter().find(|d| d.id == desk)
    }

    pub fn active_desk_count(&self) -> usize {
        self.desks.iter().filter(|d| d.active).count()
    }

    /// Desks currently serving a customer.
    pub fn serving_count(&self) -> usize {
        self.desks.iter().filter(|d| d.occupant.is_some()).count()
    }

    /// Every customer ever assigned to this point.  Conservation:
    /// `waiting_count + serving_count + history_count == assigned_total`.
    pub fn assigned_total(&self) -> u64 {
        self.assigned_total
    }

    // ── Mutation (crate-internal, driven by Sim) ──────────────────────────

    /// Linear scan is fine: points have a handful of desks.
    pub(crate) fn desk_index(&self, desk: DeskId) -> Option<usize> {
        self.desks.iter().position(|d| d.id == desk)
    }

    /// Append `customer` to the line's tail and refresh all estimates.
    /// Returns the new arrival's estimate.
    pub(crate) fn enqueue(&mut self, mut customer: CustomerRecord) -> Minutes {
        customer.enqueued_at = self.clock;
        self.waiting.push_back(customer);
        self.assigned_total += 1;
        assign::reestimate(&self.desks, &mut self.waiting);
        self.waiting.back().map(|c| c.wait_minutes).unwrap_or_default()
    }

    /// Pull line heads onto idle active desks, in desk order, until either
    /// runs out.  Restores the no-idle-desk-while-queue-nonempty invariant.
    pub(crate) fn fill_idle(&mut self) -> Vec<(DeskId, TicketCode)> {
        let mut seated = Vec::new();
        for i in 0..self.desks.len() {
            if !self.desks[i].is_idle() {
                continue;
            }
            let Some(customer) = self.waiting.pop_front() else {
                break;
            };
            seated.push((self.desks[i].id, customer.ticket.clone()));
            self.seat(i, customer);
        }
        seated
    }

    /// Start service at desk `i`: record the measured wait and reset the
    /// remaining-time counter to the occupant's full service time.
    fn seat(&mut self, i: usize, mut customer: CustomerRecord) {
        customer.wait_minutes = self.clock.since(customer.enqueued_at);
        self.desks[i].remaining = customer.service_minutes;
        self.desks[i].occupant = Some(customer);
    }

    /// Move desk `i`'s occupant into history and backfill from the line.
    /// No-op (returns false) if the desk has no occupant.
    fn complete_desk(&mut self, i: usize, seated: &mut Vec<(DeskId, TicketCode)>) -> bool {
        let Some(mut customer) = self.desks[i].occupant.take() else {
            return false;
        };
        customer.served_by = Some(self.desks[i].id);
        self.desks[i].remaining = Minutes::ZERO;
        self.history.push(customer);
        if self.desks[i].active {
            if let Some(next) = self.waiting.pop_front() {
                seated.push((self.desks[i].id, next.ticket.clone()));
                self.seat(i, next);
            }
        }
        true
    }

    /// Set `desk` active.  Returns the conflict flag (`false` = was already
    /// active) plus any seatings the activation triggered.
    pub(crate) fn activate(&mut self, i: usize) -> (bool, Vec<(DeskId, TicketCode)>) {
        if self.desks[i].active {
            return (false, Vec::new());
        }
        self.desks[i].active = true;
        let seated = self.fill_idle();
        assign::reestimate(&self.desks, &mut self.waiting);
        (true, seated)
    }

    /// Set `desk` inactive.  An in-service occupant is returned to the
    /// *head* of the waiting line (wait clock still running, service restarts
    /// from scratch when re-seated) — never dropped.
    pub(crate) fn deactivate(&mut self, i: usize) -> (bool, Vec<(DeskId, TicketCode)>) {
        if !self.desks[i].active {
            return (false, Vec::new());
        }
        self.desks[i].active = false;
        if let Some(customer) = self.desks[i].occupant.take() {
            self.desks[i].remaining = Minutes::ZERO;
            self.waiting.push_front(customer);
        }
        // Another desk may be idle; the displaced head goes there at once.
        let seated = self.fill_idle();
        assign::reestimate(&self.desks, &mut self.waiting);
        (true, seated)
    }

    /// Finish desk `i`'s occupant immediately (manual completion).
    pub(crate) fn complete_current(&mut self, i: usize) -> (bool, DrainOutcome) {
        let mut seated = Vec::new();
        let done = self.complete_desk(i, &mut seated);
        if done {
            assign::reestimate(&self.desks, &mut self.waiting);
        }
        (
            done,
            DrainOutcome {
                completed: usize::from(done),
                seated,
            },
        )
    }

    /// The discrete time step: advance the clock, drain every occupied
    /// active desk by `minutes` in desk order, complete and backfill desks
    /// that reach zero, then refresh the line's estimates.
    ///
    /// Customers seated during this call start with a fresh counter and are
    /// not drained until the next call, so simultaneous completions across
    /// desks within one call remain deterministic and reproducible.
    pub(crate) fn advance(&mut self, minutes: Minutes) -> DrainOutcome {
        self.clock += minutes;

        let mut completed = 0;
        let mut seated = Vec::new();
        for i in 0..self.desks.len() {
            if !self.desks[i].active || self.desks[i].occupant.is_none() {
                continue;
            }
            let left = self.desks[i].remaining.saturating_sub(minutes);
            self.desks[i].remaining = left;
            if left.is_zero() && !minutes.is_zero() {
                self.complete_desk(i, &mut seated);
                completed += 1;
            }
        }

        assign::reestimate(&self.desks, &mut self.waiting);
        DrainOutcome { completed, seated }
    }
}
