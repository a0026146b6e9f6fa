//! # Model Validator
//!
//! Entry points that run the rule catalog over a descriptor and return a
//! classified result.
//!
//! ## Raw vs Effective
//!
//! There is one catalog. [`ModelValidator::validate_raw`] runs the entries
//! tagged for the raw view against the author-written descriptor, before
//! inheritance resolution. [`ModelValidator::validate_effective`] runs the
//! entries tagged for the effective view against the resolved descriptor.
//! The two passes over the same input can legitimately disagree: a blank
//! `packaging` is only reported in the effective view, where packaging is
//! resolved.
//!
//! ## Thread Safety
//!
//! `ModelValidator` holds only an immutable severity matrix. It is `Copy`,
//! `Send`, and `Sync`; validate any number of descriptors concurrently from
//! one instance.

use pomcheck_core::{Model, ValidationLevel};

use crate::catalog::{rules_for, View};
use crate::finding::Findings;
use crate::result::{Accumulator, ValidationResult};
use crate::severity::SeverityMatrix;

/// Validates descriptors against the rule catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelValidator {
    matrix: SeverityMatrix,
}

impl ModelValidator {
    /// A validator using [`SeverityMatrix::STANDARD`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator using a caller-supplied severity policy.
    pub fn with_matrix(matrix: SeverityMatrix) -> Self {
        Self { matrix }
    }

    /// The severity policy in use.
    pub fn matrix(&self) -> &SeverityMatrix {
        &self.matrix
    }

    /// Validate a descriptor as authored, before inheritance and
    /// interpolation.
    pub fn validate_raw(&self, model: &Model, level: ValidationLevel) -> ValidationResult {
        self.validate(View::Raw, model, level)
    }

    /// Validate a descriptor after inheritance and interpolation.
    pub fn validate_effective(&self, model: &Model, level: ValidationLevel) -> ValidationResult {
        self.validate(View::Effective, model, level)
    }

    fn validate(&self, view: View, model: &Model, level: ValidationLevel) -> ValidationResult {
        let span = tracing::debug_span!(
            "validate",
            mode = view.as_str(),
            level = level.as_str(),
            artifact = model.artifact_id.as_deref().unwrap_or_default(),
        );
        let _guard = span.enter();

        let mut acc = Accumulator::new(&self.matrix, level);
        for rule in rules_for(view) {
            let mut findings = Findings::new();
            rule.run(model, &mut findings);
            if !findings.is_empty() {
                tracing::trace!(rule = rule.name, count = findings.len(), "rule reported");
            }
            for finding in findings.into_inner() {
                acc.record(&finding);
            }
        }

        let result = acc.finish();
        tracing::debug!(
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "validation complete"
        );
        result
    }
}
