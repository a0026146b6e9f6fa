//! # Error Types
//!
//! Validation findings are data, not errors: a malformed descriptor is
//! reported through a validation result and never through this type.
//! `PomcheckError` covers the only abnormal condition the validator knows
//! about, a caller handing it a selector it cannot interpret.

use thiserror::Error;

/// Top-level error type for pomcheck.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PomcheckError {
    /// The caller asked for a validation level that does not exist.
    #[error("unknown validation level: {0}")]
    UnknownLevel(String),
}
