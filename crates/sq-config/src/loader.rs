//! Scenario loading: parse, build the catalog, apply initial state.

use std::io::Read;
use std::path::Path;

use sq_catalog::CatalogBuilder;
use sq_core::{DeskId, Minutes, PointId, TransactionId};
use sq_engine::{NoopObserver, Sim};

use crate::doc::ScenarioDoc;
use crate::error::{ConfigError, ConfigResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a scenario file and return a ready [`Sim`].
///
/// `seed` drives ticket generation for the run.
pub fn load_scenario(path: &Path, seed: u64) -> ConfigResult<Sim> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file, seed)
}

/// Like [`load_scenario`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenario text.
pub fn load_scenario_reader<R: Read>(reader: R, seed: u64) -> ConfigResult<Sim> {
    let doc: ScenarioDoc = serde_json::from_reader(reader)?;
    build_sim(&doc, seed)
}

// ── Construction ──────────────────────────────────────────────────────────────

/// Positional-index → catalog-ID maps for one parsed document.
struct IdMaps {
    /// `[company][point]` → PointId
    points: Vec<Vec<PointId>>,
    /// `[company][point][desk]` → DeskId
    desks: Vec<Vec<Vec<DeskId>>>,
    /// `[company][transaction]` → TransactionId
    transactions: Vec<Vec<TransactionId>>,
}

impl IdMaps {
    fn point(&self, company: usize, point: usize) -> ConfigResult<PointId> {
        let points = self
            .points
            .get(company)
            .ok_or(ConfigError::UnknownRef { what: "company", index: company })?;
        points
            .get(point)
            .copied()
            .ok_or(ConfigError::UnknownRef { what: "point", index: point })
    }

    fn desk(&self, company: usize, point: usize, desk: usize) -> ConfigResult<DeskId> {
        // Callers resolve `point()` first, so company/point bounds are checked.
        self.desks[company][point]
            .get(desk)
            .copied()
            .ok_or(ConfigError::UnknownRef { what: "desk", index: desk })
    }

    fn transaction(&self, company: usize, tx: usize) -> ConfigResult<TransactionId> {
        self.transactions[company]
            .get(tx)
            .copied()
            .ok_or(ConfigError::UnknownRef { what: "transaction", index: tx })
    }
}

fn build_sim(doc: &ScenarioDoc, seed: u64) -> ConfigResult<Sim> {
    // ── Catalog ───────────────────────────────────────────────────────────
    let mut builder = CatalogBuilder::new();
    let mut maps = IdMaps {
        points:       Vec::with_capacity(doc.companies.len()),
        desks:        Vec::with_capacity(doc.companies.len()),
        transactions: Vec::with_capacity(doc.companies.len()),
    };

    for company_doc in &doc.companies {
        let company = builder.add_company(&company_doc.name, &company_doc.abbreviation);

        let tx_ids = company_doc
            .transactions
            .iter()
            .map(|t| builder.add_transaction(company, &t.name, Minutes(t.minutes)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut point_ids = Vec::with_capacity(company_doc.points.len());
        let mut desk_ids = Vec::with_capacity(company_doc.points.len());
        for point_doc in &company_doc.points {
            let point = builder.add_point(company, &point_doc.name, &point_doc.address)?;
            let desks = point_doc
                .desks
                .iter()
                .map(|d| builder.add_desk(point, &d.label, &d.operator))
                .collect::<Result<Vec<_>, _>>()?;
            point_ids.push(point);
            desk_ids.push(desks);
        }

        maps.points.push(point_ids);
        maps.desks.push(desk_ids);
        maps.transactions.push(tx_ids);
    }

    let mut sim = Sim::new(builder.build(), seed);

    // ── Initial state ─────────────────────────────────────────────────────
    let Some(initial) = &doc.initial_state else {
        return Ok(sim);
    };

    for desk_ref in &initial.active_desks {
        let point = maps.point(desk_ref.company, desk_ref.point)?;
        let desk = maps.desk(desk_ref.company, desk_ref.point, desk_ref.desk)?;
        // A desk listed twice is a conflict no-op, same as double activation.
        sim.activate_desk(point, desk, &mut NoopObserver)?;
    }

    for customer in &initial.customers {
        let point = maps.point(customer.company, customer.point)?;
        let mut transactions = Vec::new();
        for selection in &customer.transactions {
            let tx = maps.transaction(customer.company, selection.transaction)?;
            transactions.extend(std::iter::repeat_n(tx, selection.quantity as usize));
        }
        sim.assign(point, &customer.identity, &customer.name, &transactions, &mut NoopObserver)?;
    }

    Ok(sim)
}
