//! # pomcheck-validator — Descriptor Validation
//!
//! Structural validation of project descriptors before they are used to
//! plan a build. A descriptor with a malformed identity, a dependency
//! without a version, or an aggregator with the wrong packaging is reported
//! here with a precise, path-scoped message instead of surfacing later as an
//! ambiguous resolution failure.
//!
//! ## Pieces
//!
//! - [`catalog`]: the ordered rule catalog. Every rule is a pure function
//!   from a model to findings, tagged with the views (raw, effective) it
//!   runs in.
//! - [`severity`]: the `(rule, level)` severity matrix encoding
//!   backward-compatibility policy.
//! - [`result`]: the accumulator that classifies findings and the
//!   [`ValidationResult`] it produces.
//! - [`path`]: compositional dotted field paths.
//! - [`validator`]: the [`ModelValidator`] entry points.
//!
//! ## Example
//!
//! ```
//! use pomcheck_core::{Model, ValidationLevel};
//! use pomcheck_validator::ModelValidator;
//!
//! let mut model = Model::new("org.example", "app", "1.0");
//! model.version = None;
//!
//! let result = ModelValidator::new().validate_effective(&model, ValidationLevel::STRICT);
//! assert_eq!(result.errors(), ["'version' is missing."]);
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `pomcheck-core` internally.
//! - Validation never fails: findings are data. The only rejected input is
//!   a level selector that names no level, rejected by `pomcheck-core`
//!   before validation starts.
//! - No I/O, no shared mutable state.

pub mod catalog;
pub mod finding;
pub mod path;
pub mod result;
pub mod severity;
pub mod validator;

pub use catalog::{View, Views, CATALOG};
pub use finding::{Finding, RuleId, ID_PATTERN, RULE_COUNT};
pub use path::FieldPath;
pub use result::ValidationResult;
pub use severity::{Severity, SeverityMatrix};
pub use validator::ModelValidator;
