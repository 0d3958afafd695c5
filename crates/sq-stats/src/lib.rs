//! `sq-stats` — pure statistics reductions over queue state.
//!
//! Both queries are read-only snapshots: they walk a point's history and
//! waiting line and mutate nothing.
//!
//! # Populations
//!
//! | Figure          | Reduced over                                          |
//! |-----------------|-------------------------------------------------------|
//! | wait times      | history's measured waits + waiting line's estimates   |
//! | service times   | history's service durations                           |
//! | `total_served`  | history length                                        |
//!
//! Empty populations yield zero for max/min/avg by convention — a point that
//! has served nobody reports zeros, not an error.

use sq_core::{DeskId, Minutes};
use sq_engine::PointState;

#[cfg(test)]
mod tests;

// ── QueueStats ────────────────────────────────────────────────────────────────

/// Min/max/average wait and service times for one point or one desk.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QueueStats {
    pub max_wait:     Minutes,
    pub min_wait:     Minutes,
    pub avg_wait:     f64,
    pub max_service:  Minutes,
    pub min_service:  Minutes,
    pub avg_service:  f64,
    pub total_served: usize,
}

// ── Reductions ────────────────────────────────────────────────────────────────

/// Statistics for a whole service point.
pub fn point_stats(point: &PointState) -> QueueStats {
    let waits = point
        .history()
        .iter()
        .map(|c| c.wait_minutes)
        .chain(point.waiting().map(|c| c.wait_minutes));
    let services = point.history().iter().map(|c| c.service_minutes);

    let (max_wait, min_wait, avg_wait) = reduce(waits);
    let (max_service, min_service, avg_service) = reduce(services);
    QueueStats {
        max_wait,
        min_wait,
        avg_wait,
        max_service,
        min_service,
        avg_service,
        total_served: point.history_count(),
    }
}

/// The same reduction restricted to customers completed by one desk.
pub fn desk_stats(point: &PointState, desk: DeskId) -> QueueStats {
    let served = || {
        point
            .history()
            .iter()
            .filter(move |c| c.served_by == Some(desk))
    };

    let (max_wait, min_wait, avg_wait) = reduce(served().map(|c| c.wait_minutes));
    let (max_service, min_service, avg_service) = reduce(served().map(|c| c.service_minutes));
    QueueStats {
        max_wait,
        min_wait,
        avg_wait,
        max_service,
        min_service,
        avg_service,
        total_served: served().count(),
    }
}

/// `(max, min, avg)` of a minute series; all-zero for an empty series.
fn reduce(series: impl Iterator<Item = Minutes>) -> (Minutes, Minutes, f64) {
    let mut max = Minutes::ZERO;
    let mut min = Minutes::ZERO;
    let mut sum = 0u64;
    let mut count = 0u64;
    for m in series {
        if count == 0 {
            max = m;
            min = m;
        } else {
            max = max.max(m);
            min = min.min(m);
        }
        sum += u64::from(m.0);
        count += 1;
    }
    if count == 0 {
        (Minutes::ZERO, Minutes::ZERO, 0.0)
    } else {
        (max, min, sum as f64 / count as f64)
    }
}
