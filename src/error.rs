use thiserror::Error;

/// Errors reported by [`IntIntervalSet`](crate::IntIntervalSet)
/// operations.
///
/// All validation happens before any mutation, so an operation that
/// returns an error leaves the set exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation was given interval bounds with `lower > upper`.
    #[error("invalid interval: [{lower}, {upper}]")]
    InvalidInterval { lower: i64, upper: i64 },

    /// Interval removal is declared but deliberately not implemented.
    #[error("interval removal is not implemented")]
    RemoveUnimplemented,
}

/// Rejects backwards interval bounds.
pub(crate) fn check_interval(lower: i64, upper: i64) -> Result<(), Error> {
    if lower > upper {
        return Err(Error::InvalidInterval { lower, upper });
    }
    Ok(())
}
