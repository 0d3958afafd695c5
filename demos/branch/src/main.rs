//! branch — smallest end-to-end demo for the rust_sq simulation.
//!
//! Loads a one-bank, one-branch scenario with two desks, feeds a morning's
//! worth of walk-in customers, advances time in 5-minute steps, and writes
//! the CSV report plus a printed summary.

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use sq_config::load_scenario_reader;
use sq_core::{Minutes, PointId, TransactionId};
use sq_engine::Sim;
use sq_report::{CsvWriter, ReportObserver};
use sq_stats::{desk_stats, point_stats};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const STEP:       Minutes = Minutes(5);
const STEPS:      u32 = 36; // a 3-hour morning
const OUTPUT_DIR: &str = "out";

// ── Scenario ──────────────────────────────────────────────────────────────────

// One company, one point, two desks (one staffed from the start), three
// transaction types, two customers already waiting when the doors open.
const SCENARIO_JSON: &str = r#"{
  "companies": [{
    "name": "Banco Industrial",
    "abbreviation": "BI",
    "transactions": [
      {"name": "Retiro de efectivo", "minutes": 5},
      {"name": "Depósito", "minutes": 7},
      {"name": "Pago de servicios", "minutes": 10}
    ],
    "points": [{
      "name": "Miraflores",
      "address": "CC Miraflores, zona 11",
      "desks": [
        {"label": "Caja 1", "operator": "Lucía"},
        {"label": "Caja 2", "operator": "Marco"}
      ]
    }]
  }],
  "initial_state": {
    "active_desks": [{"company": 0, "point": 0, "desk": 0}],
    "customers": [
      {"company": 0, "point": 0, "identity": "2987 45678 0101", "name": "Ana",
       "transactions": [{"transaction": 0, "quantity": 2}]},
      {"company": 0, "point": 0, "identity": "1544 98001 0101", "name": "Beto",
       "transactions": [{"transaction": 2}]}
    ]
  }
}"#;

// Walk-ins: (arrival step, identity, name, transaction indices).
const ARRIVALS: &[(u32, &str, &str, &[u16])] = &[
    (1, "0801 11111 0101", "Carla", &[1]),
    (2, "0802 22222 0101", "Diego", &[0, 2]),
    (4, "0803 33333 0101", "Elsa", &[0]),
    (6, "0804 44444 0101", "Fede", &[1, 1]),
    (9, "0805 55555 0101", "Gaby", &[2]),
];

const POINT: PointId = PointId(0);

fn main() -> Result<()> {
    let mut sim: Sim = load_scenario_reader(Cursor::new(SCENARIO_JSON), SEED)?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut observer = ReportObserver::new(writer);

    // Staff the second desk once the morning queue builds up (step 3).
    let desks: Vec<_> = sim.catalog().desks_of(POINT).to_vec();

    for step in 0..STEPS {
        if step == 3 {
            sim.activate_desk(POINT, desks[1], &mut observer)?;
            println!("[{:>3} min] second desk opened", step * STEP.0);
        }

        for &(arrival, identity, name, txs) in ARRIVALS {
            if arrival == step {
                let transactions: Vec<TransactionId> =
                    txs.iter().map(|&i| TransactionId(i)).collect();
                let receipt = sim.assign(POINT, identity, name, &transactions, &mut observer)?;
                println!(
                    "[{:>3} min] {name}: ticket {}, est. wait {}, service {}",
                    step * STEP.0,
                    receipt.ticket,
                    receipt.estimated_wait,
                    receipt.service_minutes
                );
            }
        }

        sim.advance(POINT, STEP, &mut observer)?;
    }

    let state = sim
        .point_state(POINT)
        .ok_or_else(|| anyhow::anyhow!("point state missing"))?;
    observer.snapshot(state);
    observer.close()?;

    // ── Printed summary ───────────────────────────────────────────────────
    let stats = point_stats(state);
    println!();
    println!("after {}:", state.clock());
    println!(
        "  served {} | waiting {} | serving {}",
        stats.total_served,
        state.waiting_count(),
        state.serving_count()
    );
    println!(
        "  wait    min {} / avg {:.1} / max {}",
        stats.min_wait, stats.avg_wait, stats.max_wait
    );
    println!(
        "  service min {} / avg {:.1} / max {}",
        stats.min_service, stats.avg_service, stats.max_service
    );
    for &desk in &desks {
        let per_desk = desk_stats(state, desk);
        let label = sim
            .catalog()
            .desk(desk)
            .map(|d| d.label.as_str())
            .unwrap_or("?");
        println!("  {label}: served {}", per_desk.total_served);
    }
    println!("report written to {OUTPUT_DIR}/");

    Ok(())
}
