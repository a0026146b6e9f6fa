//! # Severity Matrix — Backward-Compatibility Policy
//!
//! Maps every `(RuleId, ValidationLevel)` pair to a [`Severity`]. Rules know
//! nothing about levels; the matrix alone decides whether a finding is an
//! error, a warning, or dropped. Adding a compatibility tier means adding a
//! column here, with no change to any rule.
//!
//! ## Standard Policy
//!
//! Most rules are errors at every tier. `Minimal` drops only the checks
//! added after it: model version support, system paths, scopes, plugin
//! management, report plugins, distribution status and duplicate modules.
//! The one core rule whose classification moves between error and warning
//! is the missing plugin version: older engines resolved a default version
//! and only warned, the 3.1 engine refuses.

use std::fmt;

use pomcheck_core::{ValidationLevel, VALIDATION_LEVEL_COUNT};

use crate::finding::{RuleId, RULE_COUNT};

/// Classification of a finding at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Recorded in the error sequence; the caller aborts the build.
    Error,
    /// Recorded in the warning sequence; surfaced but non-fatal.
    Warning,
    /// Not recorded at all.
    Suppressed,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suppressed => "suppressed",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const E: Severity = Severity::Error;
const W: Severity = Severity::Warning;
const S: Severity = Severity::Suppressed;

/// One row per rule, in [`RuleId`] declaration order.
type Row = (RuleId, [Severity; VALIDATION_LEVEL_COUNT]);

#[rustfmt::skip]
const STANDARD_ROWS: [Row; RULE_COUNT] = [
    //                                     minimal 2.0 3.0 3.1
    (RuleId::ModelVersionRequired,        [E, E, E, E]),
    (RuleId::ModelVersionSupported,       [S, E, E, E]),
    (RuleId::CoordinateRequired,          [E, E, E, E]),
    (RuleId::CoordinatePattern,           [E, E, E, E]),
    (RuleId::PackagingRequired,           [E, E, E, E]),
    (RuleId::ParentCoordinates,           [E, E, E, E]),
    (RuleId::ParentSelfReference,         [E, E, E, E]),
    (RuleId::DependencyCoordinates,       [E, E, E, E]),
    (RuleId::DependencyPattern,           [E, E, E, E]),
    (RuleId::DependencySystemPath,        [S, E, E, E]),
    (RuleId::DependencyScope,             [S, W, W, W]),
    (RuleId::PluginCoordinates,           [E, E, E, E]),
    (RuleId::PluginVersion,               [W, W, W, E]),
    (RuleId::PluginManagementCoordinates, [S, E, E, E]),
    (RuleId::ResourceDirectory,           [E, E, E, E]),
    (RuleId::ReportPluginCoordinates,     [S, E, E, E]),
    (RuleId::RepositoryCoordinates,       [E, E, E, E]),
    (RuleId::DistributionStatus,          [S, E, E, E]),
    (RuleId::AggregatorPackaging,         [E, E, E, E]),
    (RuleId::ModulePath,                  [E, E, E, E]),
    (RuleId::ModuleDuplicate,             [S, W, E, E]),
];

/// Lookup table from `(rule, level)` to severity.
///
/// Immutable and `Copy`; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityMatrix {
    rows: [Row; RULE_COUNT],
}

impl SeverityMatrix {
    /// The policy shipped with the validator.
    pub const STANDARD: SeverityMatrix = SeverityMatrix {
        rows: STANDARD_ROWS,
    };

    /// Classify a finding of `rule` at `level`.
    pub fn classify(&self, rule: RuleId, level: ValidationLevel) -> Severity {
        let (row_rule, columns) = &self.rows[rule.index()];
        debug_assert_eq!(*row_rule, rule, "severity matrix row out of order");
        columns[level.index()]
    }

    /// Return a copy of this matrix with one cell replaced.
    pub fn with_override(
        mut self,
        rule: RuleId,
        level: ValidationLevel,
        severity: Severity,
    ) -> Self {
        self.rows[rule.index()].1[level.index()] = severity;
        self
    }
}

impl Default for SeverityMatrix {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_align_with_rule_ids() {
        for (i, (rule, _)) in STANDARD_ROWS.iter().enumerate() {
            assert_eq!(rule.index(), i, "row {i} holds {rule}");
        }
    }

    #[test]
    fn test_plugin_version_moves_between_error_and_warning() {
        let m = SeverityMatrix::STANDARD;
        assert_eq!(m.classify(RuleId::PluginVersion, ValidationLevel::Maven31), Severity::Error);
        assert_eq!(m.classify(RuleId::PluginVersion, ValidationLevel::STRICT), Severity::Error);
        assert_eq!(m.classify(RuleId::PluginVersion, ValidationLevel::Maven30), Severity::Warning);
        assert_eq!(m.classify(RuleId::PluginVersion, ValidationLevel::Maven20), Severity::Warning);
        assert_eq!(m.classify(RuleId::PluginVersion, ValidationLevel::Minimal), Severity::Warning);
    }

    #[test]
    fn test_core_rules_are_never_suppressed() {
        let m = SeverityMatrix::STANDARD;
        for rule in [
            RuleId::ModelVersionRequired,
            RuleId::CoordinateRequired,
            RuleId::CoordinatePattern,
            RuleId::PackagingRequired,
            RuleId::DependencyCoordinates,
            RuleId::DependencyPattern,
            RuleId::PluginCoordinates,
            RuleId::PluginVersion,
            RuleId::ResourceDirectory,
            RuleId::RepositoryCoordinates,
            RuleId::AggregatorPackaging,
        ] {
            for level in ValidationLevel::all() {
                assert_ne!(m.classify(rule, *level), Severity::Suppressed, "{rule} at {level}");
            }
        }
    }

    #[test]
    fn test_identity_rules_are_level_invariant_errors() {
        let m = SeverityMatrix::STANDARD;
        for rule in [
            RuleId::ModelVersionRequired,
            RuleId::CoordinateRequired,
            RuleId::CoordinatePattern,
            RuleId::PackagingRequired,
            RuleId::AggregatorPackaging,
        ] {
            for level in ValidationLevel::all() {
                assert_eq!(m.classify(rule, *level), Severity::Error, "{rule} at {level}");
            }
        }
    }

    #[test]
    fn test_strict_never_suppresses() {
        let m = SeverityMatrix::STANDARD;
        for rule in RuleId::all() {
            assert_ne!(m.classify(*rule, ValidationLevel::STRICT), Severity::Suppressed, "{rule}");
        }
    }

    #[test]
    fn test_severity_never_relaxes_with_newer_levels() {
        fn rank(s: Severity) -> u8 {
            match s {
                Severity::Suppressed => 0,
                Severity::Warning => 1,
                Severity::Error => 2,
            }
        }
        let m = SeverityMatrix::STANDARD;
        for rule in RuleId::all() {
            for pair in ValidationLevel::all().windows(2) {
                assert!(
                    rank(m.classify(*rule, pair[0])) <= rank(m.classify(*rule, pair[1])),
                    "{rule} relaxes from {} to {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn test_with_override_changes_one_cell() {
        let m = SeverityMatrix::STANDARD.with_override(
            RuleId::DependencyScope,
            ValidationLevel::Maven31,
            Severity::Error,
        );
        assert_eq!(m.classify(RuleId::DependencyScope, ValidationLevel::Maven31), Severity::Error);
        assert_eq!(m.classify(RuleId::DependencyScope, ValidationLevel::Maven30), Severity::Warning);
        assert_eq!(SeverityMatrix::default(), SeverityMatrix::STANDARD);
    }
}
