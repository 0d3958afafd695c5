use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketError {
    /// The registry failed to draw an unissued code within the retry bound.
    /// Only plausible once most of the ~8.1 M code space has been issued
    /// in a single run.
    #[error("no unique ticket code found within {attempts} attempts")]
    ExhaustedRetries { attempts: u32 },
}

pub type TicketResult<T> = Result<T, TicketError>;
