//! Catalog representation and builder.
//!
//! # Data layout
//!
//! All entities live in flat `Vec`s indexed by their typed ID; ownership is
//! recorded both upward (each entity stores its owner's ID) and downward
//! (each owner stores an ordered child-ID list).  Child lists preserve
//! insertion order, which is the display order and — for desks — the
//! deterministic processing order of the time advancer.
//!
//! Do not construct [`Catalog`] directly; use [`CatalogBuilder`], which
//! validates every cross-reference at insertion time so a built catalog
//! contains no dangling IDs.

use sq_core::{CompanyId, DeskId, Minutes, PointId, TransactionId};

use crate::error::{CatalogError, CatalogResult};

// ── Entities ──────────────────────────────────────────────────────────────────

/// A company offering service at one or more points.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Company {
    pub name:         String,
    pub abbreviation: String,
    /// Service points in insertion (display) order.
    pub points:       Vec<PointId>,
    /// Transaction types this company offers, in insertion order.
    pub transactions: Vec<TransactionId>,
}

/// A physical or logical location with service desks.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServicePoint {
    pub company: CompanyId,
    pub name:    String,
    pub address: String,
    /// Desks in insertion order — the canonical desk iteration order.
    pub desks:   Vec<DeskId>,
}

/// A single service position; serves at most one customer at a time.
///
/// This is the static definition only.  Activation state and the current
/// occupant live in `sq-engine`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Desk {
    pub point:    PointId,
    pub label:    String,
    pub operator: String,
}

/// A catalog-defined unit of work with a fixed positive duration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionType {
    pub company: CompanyId,
    pub name:    String,
    pub minutes: Minutes,
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// The read-only definition set for one run: companies, their service points
/// and desks, and their transaction types.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    companies:    Vec<Company>,
    points:       Vec<ServicePoint>,
    desks:        Vec<Desk>,
    transactions: Vec<TransactionType>,
}

impl Catalog {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn desk_count(&self) -> usize {
        self.desks.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    // ── Entity lookup ─────────────────────────────────────────────────────

    pub fn company(&self, id: CompanyId) -> Option<&Company> {
        self.companies.get(id.index())
    }

    pub fn point(&self, id: PointId) -> Option<&ServicePoint> {
        self.points.get(id.index())
    }

    pub fn desk(&self, id: DeskId) -> Option<&Desk> {
        self.desks.get(id.index())
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&TransactionType> {
        self.transactions.get(id.index())
    }

    // ── Ownership traversal ───────────────────────────────────────────────

    /// Service points of `company`, in insertion order.  Empty on unknown ID.
    pub fn points_of(&self, company: CompanyId) -> &[PointId] {
        self.company(company).map(|c| c.points.as_slice()).unwrap_or(&[])
    }

    /// Desks of `point`, in insertion order.  Empty on unknown ID.
    pub fn desks_of(&self, point: PointId) -> &[DeskId] {
        self.point(point).map(|p| p.desks.as_slice()).unwrap_or(&[])
    }

    /// Transaction types offered by `company`.  Empty on unknown ID.
    pub fn transactions_of(&self, company: CompanyId) -> &[TransactionId] {
        self.company(company)
            .map(|c| c.transactions.as_slice())
            .unwrap_or(&[])
    }

    /// `true` if `tx` exists and is offered by the company running `point`.
    pub fn transaction_available_at(&self, tx: TransactionId, point: PointId) -> bool {
        match (self.transaction(tx), self.point(point)) {
            (Some(t), Some(p)) => t.company == p.company,
            _ => false,
        }
    }

    /// Iterator over all company IDs in display order.
    pub fn company_ids(&self) -> impl Iterator<Item = CompanyId> + '_ {
        (0..self.companies.len() as u16).map(CompanyId)
    }

    /// Iterator over all point IDs.
    pub fn point_ids(&self) -> impl Iterator<Item = PointId> + '_ {
        (0..self.points.len() as u32).map(PointId)
    }
}

// ── CatalogBuilder ────────────────────────────────────────────────────────────

/// Incrementally builds a [`Catalog`], handing out IDs in insertion order.
///
/// Every `add_*` call that references an owner validates the owner exists,
/// so the built catalog is reference-closed by construction.
#[derive(Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_company(&mut self, name: &str, abbreviation: &str) -> CompanyId {
        let id = CompanyId(self.catalog.companies.len() as u16);
        self.catalog.companies.push(Company {
            name:         name.to_owned(),
            abbreviation: abbreviation.to_owned(),
            points:       Vec::new(),
            transactions: Vec::new(),
        });
        id
    }

    pub fn add_point(
        &mut self,
        company: CompanyId,
        name:    &str,
        address: &str,
    ) -> CatalogResult<PointId> {
        let id = PointId(self.catalog.points.len() as u32);
        let owner = self
            .catalog
            .companies
            .get_mut(company.index())
            .ok_or(CatalogError::UnknownCompany(company))?;
        owner.points.push(id);
        self.catalog.points.push(ServicePoint {
            company,
            name:    name.to_owned(),
            address: address.to_owned(),
            desks:   Vec::new(),
        });
        Ok(id)
    }

    pub fn add_desk(
        &mut self,
        point:    PointId,
        label:    &str,
        operator: &str,
    ) -> CatalogResult<DeskId> {
        let id = DeskId(self.catalog.desks.len() as u32);
        let owner = self
            .catalog
            .points
            .get_mut(point.index())
            .ok_or(CatalogError::UnknownPoint(point))?;
        owner.desks.push(id);
        self.catalog.desks.push(Desk {
            point,
            label:    label.to_owned(),
            operator: operator.to_owned(),
        });
        Ok(id)
    }

    pub fn add_transaction(
        &mut self,
        company: CompanyId,
        name:    &str,
        minutes: Minutes,
    ) -> CatalogResult<TransactionId> {
        if minutes.is_zero() {
            return Err(CatalogError::ZeroDuration {
                name: name.to_owned(),
            });
        }
        let id = TransactionId(self.catalog.transactions.len() as u16);
        let owner = self
            .catalog
            .companies
            .get_mut(company.index())
            .ok_or(CatalogError::UnknownCompany(company))?;
        owner.transactions.push(id);
        self.catalog.transactions.push(TransactionType {
            company,
            name: name.to_owned(),
            minutes,
        });
        Ok(id)
    }

    /// Freeze the catalog.  No further edits are possible.
    pub fn build(self) -> Catalog {
        self.catalog
    }
}
