use sq_core::{CompanyId, PointId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("company {0} not found")]
    UnknownCompany(CompanyId),

    #[error("service point {0} not found")]
    UnknownPoint(PointId),

    /// Transaction durations are positive by contract; a zero-minute
    /// transaction would let a desk complete work it never started.
    #[error("transaction type {name:?} has zero duration")]
    ZeroDuration { name: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
