use thiserror::Error;

/// Every way a quote fetch can fail. Callers fall back to a local quote
/// instead of surfacing these.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("quote endpoint returned HTTP {0}")]
    Status(u16),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed quote payload: {0}")]
    Malformed(String),
}

impl From<ureq::Error> for QuoteError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => QuoteError::Status(code),
            ureq::Error::Transport(transport) => QuoteError::Transport(transport.to_string()),
        }
    }
}

pub type QuoteResult<T> = Result<T, QuoteError>;
