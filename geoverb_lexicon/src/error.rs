use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the query layer.
///
/// Everything recoverable (unreadable source, malformed record, malformed
/// morphemes) is absorbed where it occurs; a missing verb is the one
/// condition the caller has to handle, and it is an expected outcome of a
/// stale or mistyped link rather than a fault.
#[derive(Debug, Error)]
pub enum Error {
    #[error("verb not found: {0}")]
    VerbNotFound(i64),
}
