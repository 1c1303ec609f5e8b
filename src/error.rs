//! Error taxonomy for the persistence pipeline.
//!
//! Three kinds of failure, surfaced as explicit values at every
//! component boundary (no panics in library paths):
//!
//! - [`Error::Validation`] — the request as a whole is unusable
//!   (fewer than three points). Raised before any computation starts.
//! - [`Error::InvalidInput`] — a component received data it cannot
//!   work with (empty point/center sets, out-of-range indices,
//!   degenerate curves, non-finite coordinates).
//! - [`Error::Computation`] — the persistence engine produced a result
//!   that violates its contract, or failed internally. Carries an
//!   optional diagnostic trace (vineyard mode records the failing
//!   center there).

use thiserror::Error;

/// Errors produced by the radial persistence pipeline.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Request-level validation failure; nothing was computed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A component rejected its input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The persistence engine misbehaved.
    #[error("persistence computation failed: {message}")]
    Computation {
        message: String,
        /// Extra diagnostic context (e.g. the failing vineyard center).
        trace: Option<String>,
    },
}

impl Error {
    pub fn computation(message: impl Into<String>) -> Self {
        Error::Computation {
            message: message.into(),
            trace: None,
        }
    }

    pub fn computation_with_trace(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Error::Computation {
            message: message.into(),
            trace: Some(trace.into()),
        }
    }

    /// HTTP-style status class for the transport collaborator:
    /// 400 for anything wrong with the request, 500 for engine failures.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) | Error::InvalidInput(_) => 400,
            Error::Computation { .. } => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_split_client_and_server_faults() {
        assert_eq!(Error::Validation("n < 3".into()).status_code(), 400);
        assert_eq!(Error::InvalidInput("empty".into()).status_code(), 400);
        assert_eq!(Error::computation("bad diagram").status_code(), 500);
    }

    #[test]
    fn computation_trace_is_preserved() {
        let err = Error::computation_with_trace("engine", "center 2");
        match err {
            Error::Computation { trace, .. } => assert_eq!(trace.as_deref(), Some("center 2")),
            _ => panic!("wrong variant"),
        }
    }
}
