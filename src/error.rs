//! Error types for the portal form services
//!
//! Typed errors live here; transport-level failures from the lookup
//! channel stay as `anyhow` chains at the client boundary and are only
//! ever rendered as the fixed error message.

use thiserror::Error;

/// Refusals produced when a vacation request fails validation.
///
/// The messages match what the portal has always shown the user, so they
/// are part of the contract rather than debug text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VacationError {
    #[error("Start date must be before the end date!")]
    StartAfterEnd,

    #[error("Insufficient vacation days!")]
    InsufficientDays { requested: i64, available: i64 },
}
