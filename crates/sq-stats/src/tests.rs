//! Tests for the statistics reductions.

use sq_catalog::CatalogBuilder;
use sq_core::{DeskId, Minutes, PointId, TransactionId};
use sq_engine::{NoopObserver, Sim};

use crate::{desk_stats, point_stats};

const P: PointId = PointId(0);
const DESK_A: DeskId = DeskId(0);
const DESK_B: DeskId = DeskId(1);
const TX5: TransactionId = TransactionId(0);
const TX8: TransactionId = TransactionId(1);

fn branch_sim() -> Sim {
    let mut b = CatalogBuilder::new();
    let bank = b.add_company("Banco Industrial", "BI");
    let p = b.add_point(bank, "Miraflores", "zona 11").unwrap();
    b.add_desk(p, "Caja 1", "Lucía").unwrap();
    b.add_desk(p, "Caja 2", "Marco").unwrap();
    b.add_transaction(bank, "Retiro", Minutes(5)).unwrap();
    b.add_transaction(bank, "Pago", Minutes(8)).unwrap();
    Sim::new(b.build(), 42)
}

#[test]
fn empty_point_is_all_zero() {
    let sim = branch_sim();
    let stats = point_stats(sim.point_state(P).unwrap());
    assert_eq!(stats, crate::QueueStats::default());
}

#[test]
fn service_figures_over_history() {
    let mut sim = branch_sim();
    sim.activate_desk(P, DESK_A, &mut NoopObserver).unwrap();
    sim.assign(P, "a", "A", &[TX5], &mut NoopObserver).unwrap();
    sim.assign(P, "b", "B", &[TX8], &mut NoopObserver).unwrap();
    sim.advance(P, Minutes(5), &mut NoopObserver).unwrap();
    sim.advance(P, Minutes(8), &mut NoopObserver).unwrap();

    let stats = point_stats(sim.point_state(P).unwrap());
    assert_eq!(stats.total_served, 2);
    assert_eq!(stats.max_service, Minutes(8));
    assert_eq!(stats.min_service, Minutes(5));
    assert!((stats.avg_service - 6.5).abs() < 1e-9);
}

#[test]
fn wait_figures_mix_measured_and_estimated() {
    let mut sim = branch_sim();
    sim.activate_desk(P, DESK_A, &mut NoopObserver).unwrap();
    sim.assign(P, "a", "A", &[TX5], &mut NoopObserver).unwrap(); // seated, wait 0
    sim.assign(P, "b", "B", &[TX5], &mut NoopObserver).unwrap(); // queued, estimate 5
    sim.advance(P, Minutes(5), &mut NoopObserver).unwrap();      // a done; b seated, wait 5
    sim.assign(P, "c", "C", &[TX5], &mut NoopObserver).unwrap(); // queued, estimate 5

    // Waits: a measured 0, b measured 5 (still in service — not yet in
    // history, so not counted), c estimated 5 → population {0, 5}.
    let stats = point_stats(sim.point_state(P).unwrap());
    assert_eq!(stats.total_served, 1);
    assert_eq!(stats.max_wait, Minutes(5));
    assert_eq!(stats.min_wait, Minutes::ZERO);
    assert!((stats.avg_wait - 2.5).abs() < 1e-9);
}

#[test]
fn desk_stats_split_by_serving_desk() {
    let mut sim = branch_sim();
    sim.activate_desk(P, DESK_A, &mut NoopObserver).unwrap();
    sim.activate_desk(P, DESK_B, &mut NoopObserver).unwrap();
    sim.assign(P, "a", "A", &[TX5], &mut NoopObserver).unwrap(); // desk A
    sim.assign(P, "b", "B", &[TX8], &mut NoopObserver).unwrap(); // desk B
    sim.advance(P, Minutes(8), &mut NoopObserver).unwrap();

    let state = sim.point_state(P).unwrap();
    let a = desk_stats(state, DESK_A);
    let b = desk_stats(state, DESK_B);
    assert_eq!(a.total_served, 1);
    assert_eq!(a.max_service, Minutes(5));
    assert_eq!(b.total_served, 1);
    assert_eq!(b.max_service, Minutes(8));
}

#[test]
fn desk_stats_for_idle_desk_are_zero() {
    let sim = branch_sim();
    let stats = desk_stats(sim.point_state(P).unwrap(), DESK_B);
    assert_eq!(stats, crate::QueueStats::default());
}
