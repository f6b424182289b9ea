//! Error types for lift-dispatch.

use lift_core::{CabinId, CoreError};
use thiserror::Error;

/// Errors returned by dispatch operations.  Contract violations are reported
/// before any state changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("cabin {cabin} out of range for a fleet of {count}")]
    CabinOutOfRange {
        cabin: CabinId,
        count: usize,
    },

    #[error("floor {floor} outside served range [{lower}, {higher}]")]
    FloorOutOfRange {
        floor:  i32,
        lower:  i32,
        higher: i32,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("dispatcher lock poisoned by a panicking caller")]
    Poisoned,
}

/// Alias for `Result<T, DispatchError>`.
pub type DispatchResult<T> = Result<T, DispatchError>;
