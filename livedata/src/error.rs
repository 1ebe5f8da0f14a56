use std::cell::{BorrowError, BorrowMutError};

use thiserror::Error;

/// Errors returned by [`SharedLiveData`](crate::SharedLiveData).
///
/// A plain [`LiveData`](crate::LiveData) never fails; the borrow checker
/// already rules out touching it from inside its own listeners.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LiveDataError {
    /// The container was accessed while it was already borrowed, which in
    /// practice means from inside one of its own listeners during a notification pass.
    #[error("live data accessed reentrantly during a notification pass")]
    Reentrant,
}

impl From<BorrowError> for LiveDataError {
    fn from(_: BorrowError) -> Self { LiveDataError::Reentrant }
}

impl From<BorrowMutError> for LiveDataError {
    fn from(_: BorrowMutError) -> Self { LiveDataError::Reentrant }
}
