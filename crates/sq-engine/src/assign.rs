//! Wait-time estimation: the round-robin virtual-lane formula.
//!
//! This is the system's single estimation policy; it runs both when a
//! customer is first enqueued and whenever the line or the active-desk set
//! changes afterwards, so the two readings can never diverge.
//!
//! # The formula
//!
//! With `k > 0` active desks, each starts a virtual lane pre-loaded with its
//! occupant's remaining minutes (zero if idle).  Queued customers are dealt
//! to lanes round-robin in arrival order (`queue index mod k`); a customer's
//! estimate is its lane's accumulated load at the moment it is dealt, after
//! which its own service time joins the lane.
//!
//! With `k == 0` the estimate is the customer's own service time — the
//! documented convention for a point that is open for ticketing but has no
//! desk staffed yet.

use std::collections::VecDeque;

use sq_core::Minutes;

use crate::customer::CustomerRecord;
use crate::point::DeskState;

/// Compute one estimate per waiting customer, in line order.
pub(crate) fn lane_estimates(
    desks:   &[DeskState],
    waiting: &VecDeque<CustomerRecord>,
) -> Vec<Minutes> {
    let mut loads: Vec<Minutes> = desks
        .iter()
        .filter(|d| d.active())
        .map(|d| d.remaining())
        .collect();

    if loads.is_empty() {
        return waiting.iter().map(|c| c.service_minutes).collect();
    }

    let k = loads.len();
    waiting
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let lane = i % k;
            let estimate = loads[lane];
            loads[lane] += c.service_minutes;
            estimate
        })
        .collect()
}

/// Overwrite every waiting customer's `wait_minutes` with a fresh estimate.
pub(crate) fn reestimate(desks: &[DeskState], waiting: &mut VecDeque<CustomerRecord>) {
    let estimates = lane_estimates(desks, waiting);
    for (customer, estimate) in waiting.iter_mut().zip(estimates) {
        customer.wait_minutes = estimate;
    }
}
