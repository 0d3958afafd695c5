//! The `Sim` root: one catalog, one ticket registry, one `PointState` per
//! service point.
//!
//! All mutation goes through `&mut self` methods — the simulation is a
//! single logical timeline with no interior mutability.  Callers that need
//! threads should wrap the whole `Sim` (or one per independent deployment)
//! in their own lock; points are independent of each other, but the ticket
//! registry is shared run-wide, which is why it lives here and not per
//! point.

use sq_catalog::Catalog;
use sq_core::{DeskId, Minutes, PointId, TicketCode, TicketRegistry, TransactionId};

use crate::customer::CustomerRecord;
use crate::error::{EngineError, EngineResult};
use crate::observer::QueueObserver;
use crate::point::{DrainOutcome, PointState};

// ── AssignReceipt ─────────────────────────────────────────────────────────────

/// What the customer takes away from a successful `assign`: the ticket, the
/// wait estimate at enqueue time, and the total service time.
#[derive(Clone, Debug)]
pub struct AssignReceipt {
    pub ticket:          TicketCode,
    pub estimated_wait:  Minutes,
    pub service_minutes: Minutes,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation root.
#[derive(Debug)]
pub struct Sim {
    catalog: Catalog,
    /// Indexed by `PointId` — built in catalog order.
    points:  Vec<PointState>,
    tickets: TicketRegistry,
}

impl Sim {
    /// Build runtime state for every catalog point.  All desks start
    /// inactive, all lines empty.  `seed` drives ticket generation; equal
    /// seeds give equal ticket sequences.
    pub fn new(catalog: Catalog, seed: u64) -> Self {
        let points = catalog
            .point_ids()
            .map(|p| PointState::new(p, catalog.desks_of(p)))
            .collect();
        Self {
            catalog,
            points,
            tickets: TicketRegistry::new(seed),
        }
    }

    // ── Read API ──────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runtime state of one point.
    pub fn point_state(&self, point: PointId) -> Option<&PointState> {
        self.points.get(point.index())
    }

    /// All point states in catalog order.
    pub fn point_states(&self) -> &[PointState] {
        &self.points
    }

    /// Ticket codes issued so far this run.
    pub fn tickets_issued(&self) -> usize {
        self.tickets.issued_count()
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Ticket a customer and place them at `point`.
    ///
    /// Validation (unknown point, empty selection, transactions the point's
    /// company does not offer) happens before any mutation; ticket issuance
    /// is the only fallible step after it and mutates nothing but the
    /// issued-set on failure.
    ///
    /// If an active desk is idle, the line head (for an empty line: this very
    /// customer) is seated immediately.
    pub fn assign<O: QueueObserver>(
        &mut self,
        point:        PointId,
        identity:     &str,
        name:         &str,
        transactions: &[TransactionId],
        observer:     &mut O,
    ) -> EngineResult<AssignReceipt> {
        if self.points.get(point.index()).is_none() {
            return Err(EngineError::UnknownPoint(point));
        }
        if transactions.is_empty() {
            return Err(EngineError::EmptySelection);
        }
        for &tx in transactions {
            if !self.catalog.transaction_available_at(tx, point) {
                return Err(EngineError::TransactionNotOffered { tx, point });
            }
        }

        // Validated above: every ID resolves.
        let service_minutes: Minutes = transactions
            .iter()
            .filter_map(|&tx| self.catalog.transaction(tx))
            .map(|t| t.minutes)
            .sum();

        let ticket = self.tickets.issue()?;
        let customer = CustomerRecord {
            identity:     identity.to_owned(),
            name:         name.to_owned(),
            transactions: transactions.to_vec(),
            ticket:       ticket.clone(),
            service_minutes,
            wait_minutes: Minutes::ZERO,
            enqueued_at:  Minutes::ZERO,
            served_by:    None,
        };

        let state = &mut self.points[point.index()];
        let estimated_wait = state.enqueue(customer);
        observer.on_assigned(point, &ticket, estimated_wait);

        for (desk, ticket) in state.fill_idle() {
            observer.on_service_started(point, desk, &ticket);
        }

        Ok(AssignReceipt {
            ticket,
            estimated_wait,
            service_minutes,
        })
    }

    /// Advance `point`'s clock by `minutes` and drain its desks.  Returns
    /// the number of customers completed during the step.
    pub fn advance<O: QueueObserver>(
        &mut self,
        point:    PointId,
        minutes:  Minutes,
        observer: &mut O,
    ) -> EngineResult<usize> {
        let state = self
            .points
            .get_mut(point.index())
            .ok_or(EngineError::UnknownPoint(point))?;
        let outcome = state.advance(minutes);
        self.emit_drain(point, &outcome, observer);

        let clock = self.points[point.index()].clock();
        observer.on_advanced(point, clock, outcome.completed);
        Ok(outcome.completed)
    }

    /// Activate a specific desk.  `Ok(false)` if it was already active.
    /// Activation immediately seats waiting customers on the new desk.
    pub fn activate_desk<O: QueueObserver>(
        &mut self,
        point:    PointId,
        desk:     DeskId,
        observer: &mut O,
    ) -> EngineResult<bool> {
        let (state, i) = self.desk_slot(point, desk)?;
        let (changed, seated) = state.activate(i);
        for (desk, ticket) in seated {
            observer.on_service_started(point, desk, &ticket);
        }
        Ok(changed)
    }

    /// Deactivate a specific desk.  `Ok(false)` if it was already inactive.
    /// An in-service occupant returns to the head of the waiting line.
    pub fn deactivate_desk<O: QueueObserver>(
        &mut self,
        point:    PointId,
        desk:     DeskId,
        observer: &mut O,
    ) -> EngineResult<bool> {
        let (state, i) = self.desk_slot(point, desk)?;
        let (changed, seated) = state.deactivate(i);
        for (desk, ticket) in seated {
            observer.on_service_started(point, desk, &ticket);
        }
        Ok(changed)
    }

    /// Finish `desk`'s current customer ahead of its counter (manual
    /// completion).  `Ok(false)` if the desk has no occupant.
    pub fn complete_current<O: QueueObserver>(
        &mut self,
        point:    PointId,
        desk:     DeskId,
        observer: &mut O,
    ) -> EngineResult<bool> {
        let (state, i) = self.desk_slot(point, desk)?;
        let (done, outcome) = state.complete_current(i);
        self.emit_drain(point, &outcome, observer);
        Ok(done)
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn desk_slot(&mut self, point: PointId, desk: DeskId) -> EngineResult<(&mut PointState, usize)> {
        let state = self
            .points
            .get_mut(point.index())
            .ok_or(EngineError::UnknownPoint(point))?;
        let i = state
            .desk_index(desk)
            .ok_or(EngineError::UnknownDesk { desk, point })?;
        Ok((state, i))
    }

    /// Fire completion and seating hooks for one drain pass.
    fn emit_drain<O: QueueObserver>(&self, point: PointId, outcome: &DrainOutcome, observer: &mut O) {
        let state = &self.points[point.index()];
        let clock = state.clock();
        let history = state.history();
        for customer in &history[history.len() - outcome.completed..] {
            observer.on_completed(point, customer, clock);
        }
        for (desk, ticket) in &outcome.seated {
            observer.on_service_started(point, *desk, ticket);
        }
    }
}
