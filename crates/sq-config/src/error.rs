use sq_catalog::CatalogError;
use sq_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document index (`company`, `point`, `desk`, or `transaction`)
    /// points past the entities the same document defines.
    #[error("initial state references unknown {what} index {index}")]
    UnknownRef { what: &'static str, index: usize },

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("initial state rejected by engine: {0}")]
    Engine(#[from] EngineError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
