use thiserror::Error;

/// Errors raised by the precision-aware entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A precision name or byte tag outside the four supported units.
    #[error("precision must be one of: s, ms, μs, ns (got {given:?})")]
    InvalidPrecision { given: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_precision(given: impl Into<String>) -> Self {
        let given = given.into();
        tracing::debug!(given = %given, "rejected unknown precision");
        Error::InvalidPrecision { given }
    }
}
