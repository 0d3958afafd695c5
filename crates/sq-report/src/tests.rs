//! Tests for the CSV report backend and observer bridge.

use sq_catalog::CatalogBuilder;
use sq_core::{DeskId, Minutes, PointId, TransactionId};
use sq_engine::Sim;

use crate::{CsvWriter, ReportObserver};

const P: PointId = PointId(0);
const DESK_A: DeskId = DeskId(0);
const TX5: TransactionId = TransactionId(0);

fn branch_sim() -> Sim {
    let mut b = CatalogBuilder::new();
    let bank = b.add_company("Banco Industrial", "BI");
    let p = b.add_point(bank, "Miraflores", "zona 11").unwrap();
    b.add_desk(p, "Caja 1", "Lucía").unwrap();
    b.add_transaction(bank, "Retiro", Minutes(5)).unwrap();
    Sim::new(b.build(), 42)
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn completions_appear_in_completion_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut sim = branch_sim();
    let mut obs = ReportObserver::new(CsvWriter::new(dir.path()).unwrap());

    sim.activate_desk(P, DESK_A, &mut obs).unwrap();
    let a = sim.assign(P, "id-a", "A", &[TX5], &mut obs).unwrap();
    let b = sim.assign(P, "id-b", "B", &[TX5], &mut obs).unwrap();
    sim.advance(P, Minutes(5), &mut obs).unwrap();
    sim.advance(P, Minutes(5), &mut obs).unwrap();

    obs.close().unwrap();

    let lines = read_lines(&dir.path().join("completions.csv"));
    assert_eq!(lines.len(), 3); // header + two completions
    assert_eq!(
        lines[0],
        "point,desk,ticket,identity,wait_minutes,service_minutes,completed_at"
    );
    assert_eq!(lines[1], format!("0,0,{},id-a,0,5,5", a.ticket));
    assert_eq!(lines[2], format!("0,0,{},id-b,5,5,10", b.ticket));
}

#[test]
fn snapshot_writes_point_summary() {
    let dir = tempfile::tempdir().unwrap();
    let mut sim = branch_sim();
    let mut obs = ReportObserver::new(CsvWriter::new(dir.path()).unwrap());

    sim.activate_desk(P, DESK_A, &mut obs).unwrap();
    sim.assign(P, "id-a", "A", &[TX5], &mut obs).unwrap();
    sim.assign(P, "id-b", "B", &[TX5], &mut obs).unwrap();
    sim.advance(P, Minutes(5), &mut obs).unwrap();

    obs.snapshot(sim.point_state(P).unwrap());
    obs.close().unwrap();

    let lines = read_lines(&dir.path().join("point_summaries.csv"));
    assert_eq!(lines.len(), 2);
    // clock 5; nobody waiting, one serving, one served.
    assert!(lines[1].starts_with("0,5,0,1,1,"), "got {}", lines[1]);
}

#[test]
fn finish_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut writer = CsvWriter::new(dir.path()).unwrap();
    use crate::ReportWriter;
    writer.finish().unwrap();
    writer.finish().unwrap();
}

#[test]
fn no_error_stored_on_clean_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut obs = ReportObserver::new(CsvWriter::new(dir.path()).unwrap());
    let mut sim = branch_sim();
    sim.activate_desk(P, DESK_A, &mut obs).unwrap();
    sim.assign(P, "id-a", "A", &[TX5], &mut obs).unwrap();
    sim.advance(P, Minutes(5), &mut obs).unwrap();
    assert!(obs.take_error().is_none());
}
