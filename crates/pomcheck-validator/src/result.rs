//! # Validation Results
//!
//! [`ValidationResult`] is what a validation pass hands back: two ordered
//! sequences of rendered messages. [`Accumulator`] builds one, classifying
//! each finding through the severity matrix as it arrives.
//!
//! Ordering is the order findings were recorded, which is catalog order,
//! then element order, then field order. Nothing is sorted, merged, or
//! deduplicated: two elements missing the same field yield two messages.

use std::fmt;

use pomcheck_core::ValidationLevel;

use crate::finding::Finding;
use crate::severity::{Severity, SeverityMatrix};

/// Outcome of validating one descriptor.
///
/// Immutable once returned. Any non-empty error sequence means the
/// descriptor must not be used to plan a build; warnings are informational.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    /// Error messages in evaluation order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Warning messages in evaluation order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns true if at least one error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns true if neither errors nor warnings were recorded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Consumes self and returns `(errors, warnings)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.errors, self.warnings)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .errors
            .iter()
            .map(|e| ("ERROR", e))
            .chain(self.warnings.iter().map(|w| ("WARNING", w)));
        for (i, (tag, message)) in lines.enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{tag}] {message}")?;
        }
        Ok(())
    }
}

/// Builds a [`ValidationResult`] for one pass at one level.
#[derive(Debug)]
pub struct Accumulator<'m> {
    matrix: &'m SeverityMatrix,
    level: ValidationLevel,
    result: ValidationResult,
}

impl<'m> Accumulator<'m> {
    pub fn new(matrix: &'m SeverityMatrix, level: ValidationLevel) -> Self {
        Self {
            matrix,
            level,
            result: ValidationResult::default(),
        }
    }

    /// Classify `finding` and append it to the matching sequence.
    /// Returns the severity it was classified as.
    pub fn record(&mut self, finding: &Finding) -> Severity {
        let severity = self.matrix.classify(finding.rule, self.level);
        match severity {
            Severity::Error => self.result.errors.push(finding.to_string()),
            Severity::Warning => self.result.warnings.push(finding.to_string()),
            Severity::Suppressed => {}
        }
        tracing::trace!(
            rule = finding.rule.as_str(),
            path = finding.path.as_str(),
            severity = severity.as_str(),
            "finding classified"
        );
        severity
    }

    /// Finish the pass.
    pub fn finish(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::RuleId;
    use crate::path::FieldPath;

    fn finding(rule: RuleId, path: &str, detail: &str) -> Finding {
        Finding {
            rule,
            path: FieldPath::root(path),
            detail: detail.to_string(),
        }
    }

    #[test]
    fn test_empty_result_is_clean() {
        let r = ValidationResult::default();
        assert!(r.is_clean());
        assert!(!r.has_errors());
        assert_eq!(r.to_string(), "");
    }

    #[test]
    fn test_record_routes_by_severity() {
        let matrix = SeverityMatrix::STANDARD;
        let mut acc = Accumulator::new(&matrix, ValidationLevel::Maven30);
        assert_eq!(
            acc.record(&finding(RuleId::CoordinateRequired, "version", "is missing.")),
            Severity::Error
        );
        assert_eq!(
            acc.record(&finding(RuleId::PluginVersion, "version", "is missing for g:a")),
            Severity::Warning
        );
        let r = acc.finish();
        assert_eq!(r.errors(), ["'version' is missing."]);
        assert_eq!(r.warnings(), ["'version' is missing for g:a"]);
        assert!(r.has_errors());
    }

    #[test]
    fn test_suppressed_findings_are_dropped() {
        let matrix = SeverityMatrix::STANDARD;
        let mut acc = Accumulator::new(&matrix, ValidationLevel::Minimal);
        acc.record(&finding(RuleId::DependencyScope, "scope", "is invalid."));
        assert!(acc.finish().is_clean());
    }

    #[test]
    fn test_identical_findings_are_not_merged() {
        let matrix = SeverityMatrix::STANDARD;
        let mut acc = Accumulator::new(&matrix, ValidationLevel::STRICT);
        let f = finding(RuleId::RepositoryCoordinates, "id", "is missing.");
        acc.record(&f);
        acc.record(&f);
        assert_eq!(acc.finish().errors().len(), 2);
    }

    #[test]
    fn test_display_lists_errors_then_warnings() {
        let matrix = SeverityMatrix::STANDARD;
        let mut acc = Accumulator::new(&matrix, ValidationLevel::Maven30);
        acc.record(&finding(RuleId::PluginVersion, "a", "is missing for g:a"));
        acc.record(&finding(RuleId::CoordinateRequired, "b", "is missing."));
        let r = acc.finish();
        assert_eq!(
            r.to_string(),
            "[ERROR] 'b' is missing.\n[WARNING] 'a' is missing for g:a"
        );
        let (errors, warnings) = r.into_parts();
        assert_eq!((errors.len(), warnings.len()), (1, 1));
    }
}
