//! serde document model for scenario files.
//!
//! All references between document sections are *positional*: `company: 0`
//! means the first entry of the top-level `companies` array, `point: 1` the
//! second point *of that company*, and so on.  The loader maps positions to
//! catalog IDs and rejects anything out of range.

use serde::Deserialize;

/// Top-level scenario document.
#[derive(Debug, Deserialize)]
pub struct ScenarioDoc {
    pub companies: Vec<CompanyDoc>,

    /// Optional pre-simulation state.  Absent = all desks inactive, all
    /// lines empty.
    #[serde(default)]
    pub initial_state: Option<InitialStateDoc>,
}

#[derive(Debug, Deserialize)]
pub struct CompanyDoc {
    pub name:         String,
    pub abbreviation: String,
    #[serde(default)]
    pub transactions: Vec<TransactionDoc>,
    #[serde(default)]
    pub points:       Vec<PointDoc>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionDoc {
    pub name:    String,
    /// Fixed duration; must be positive (the catalog rejects zero).
    pub minutes: u32,
}

#[derive(Debug, Deserialize)]
pub struct PointDoc {
    pub name:    String,
    pub address: String,
    #[serde(default)]
    pub desks:   Vec<DeskDoc>,
}

#[derive(Debug, Deserialize)]
pub struct DeskDoc {
    pub label:    String,
    pub operator: String,
}

#[derive(Debug, Deserialize)]
pub struct InitialStateDoc {
    /// Desks that start the run active, activated in document order.
    #[serde(default)]
    pub active_desks: Vec<DeskRefDoc>,

    /// Customers already present, assigned in document order (which is
    /// therefore their FIFO arrival order).
    #[serde(default)]
    pub customers: Vec<CustomerDoc>,
}

#[derive(Debug, Deserialize)]
pub struct DeskRefDoc {
    pub company: usize,
    pub point:   usize,
    pub desk:    usize,
}

#[derive(Debug, Deserialize)]
pub struct CustomerDoc {
    pub company:      usize,
    pub point:        usize,
    pub identity:     String,
    pub name:         String,
    pub transactions: Vec<SelectionDoc>,
}

/// One requested transaction type with a repeat count.
#[derive(Debug, Deserialize)]
pub struct SelectionDoc {
    /// Positional index into the owning company's `transactions` array.
    pub transaction: usize,
    /// How many times the customer requests it.  Defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}
