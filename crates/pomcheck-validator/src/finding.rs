//! # Findings
//!
//! A finding is one violation a rule detected, before it has been classified
//! as an error or a warning. It carries the [`RuleId`] that produced it so
//! the severity matrix can classify it, the [`FieldPath`] it is about, and the
//! text following the quoted path.
//!
//! Rendered findings always start with the single-quoted path:
//!
//! ```text
//! 'dependencies.dependency.version' is missing for org.example:lib:jar
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::path::FieldPath;

/// Conservative identifier pattern for `groupId` and `artifactId`: no path
/// separators, no characters unsafe in file names or URLs.
pub const ID_PATTERN: &str = r"^[A-Za-z0-9_\-.]+$";

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ID_PATTERN).expect("identifier pattern is a valid regex"));

/// Whether `id` is an acceptable `groupId`/`artifactId`.
pub fn is_valid_id(id: &str) -> bool {
    ID_RE.is_match(id)
}

/// Stable identifier of a rule. Keys the severity matrix.
///
/// Variants are declared in catalog order. The position of a variant is its
/// row in [`crate::severity::SeverityMatrix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    ModelVersionRequired,
    ModelVersionSupported,
    CoordinateRequired,
    CoordinatePattern,
    PackagingRequired,
    ParentCoordinates,
    ParentSelfReference,
    DependencyCoordinates,
    DependencyPattern,
    DependencySystemPath,
    DependencyScope,
    PluginCoordinates,
    PluginVersion,
    PluginManagementCoordinates,
    ResourceDirectory,
    ReportPluginCoordinates,
    RepositoryCoordinates,
    DistributionStatus,
    AggregatorPackaging,
    ModulePath,
    ModuleDuplicate,
}

/// Total number of rule identifiers. Sizes the severity matrix rows.
pub const RULE_COUNT: usize = 21;

impl RuleId {
    /// Returns all rule identifiers in declaration order.
    pub fn all() -> &'static [RuleId] {
        &[
            Self::ModelVersionRequired,
            Self::ModelVersionSupported,
            Self::CoordinateRequired,
            Self::CoordinatePattern,
            Self::PackagingRequired,
            Self::ParentCoordinates,
            Self::ParentSelfReference,
            Self::DependencyCoordinates,
            Self::DependencyPattern,
            Self::DependencySystemPath,
            Self::DependencyScope,
            Self::PluginCoordinates,
            Self::PluginVersion,
            Self::PluginManagementCoordinates,
            Self::ResourceDirectory,
            Self::ReportPluginCoordinates,
            Self::RepositoryCoordinates,
            Self::DistributionStatus,
            Self::AggregatorPackaging,
            Self::ModulePath,
            Self::ModuleDuplicate,
        ]
    }

    /// Row of this rule in tables sized by [`RULE_COUNT`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the kebab-case name of this rule, used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModelVersionRequired => "model-version-required",
            Self::ModelVersionSupported => "model-version-supported",
            Self::CoordinateRequired => "coordinate-required",
            Self::CoordinatePattern => "coordinate-pattern",
            Self::PackagingRequired => "packaging-required",
            Self::ParentCoordinates => "parent-coordinates",
            Self::ParentSelfReference => "parent-self-reference",
            Self::DependencyCoordinates => "dependency-coordinates",
            Self::DependencyPattern => "dependency-pattern",
            Self::DependencySystemPath => "dependency-system-path",
            Self::DependencyScope => "dependency-scope",
            Self::PluginCoordinates => "plugin-coordinates",
            Self::PluginVersion => "plugin-version",
            Self::PluginManagementCoordinates => "plugin-management-coordinates",
            Self::ResourceDirectory => "resource-directory",
            Self::ReportPluginCoordinates => "report-plugin-coordinates",
            Self::RepositoryCoordinates => "repository-coordinates",
            Self::DistributionStatus => "distribution-status",
            Self::AggregatorPackaging => "aggregator-packaging",
            Self::ModulePath => "module-path",
            Self::ModuleDuplicate => "module-duplicate",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single unclassified violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// The rule that produced this finding.
    pub rule: RuleId,
    /// The offending field.
    pub path: FieldPath,
    /// Text following the quoted path, e.g. `is missing.`.
    pub detail: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.path, self.detail)
    }
}

/// Ordered sink rules append their findings to.
///
/// Helpers return whether the checked value passed so callers can skip
/// follow-up checks that only make sense on a present value.
#[derive(Debug, Default)]
pub struct Findings {
    items: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding.
    pub fn report(&mut self, rule: RuleId, path: FieldPath, detail: impl Into<String>) {
        self.items.push(Finding {
            rule,
            path,
            detail: detail.into(),
        });
    }

    /// Require a non-blank value. `hint` names the element the field belongs
    /// to when the path alone does not identify it.
    pub fn require(
        &mut self,
        rule: RuleId,
        path: FieldPath,
        value: Option<&str>,
        hint: Option<&str>,
    ) -> bool {
        if value.is_some_and(|v| !v.trim().is_empty()) {
            return true;
        }
        let detail = match hint {
            Some(hint) => format!("is missing for {hint}"),
            None => "is missing.".to_string(),
        };
        self.report(rule, path, detail);
        false
    }

    /// Require a non-blank value matching [`ID_PATTERN`]. A missing value is
    /// reported under `required`, a malformed one under `pattern`; never both.
    pub fn require_id(
        &mut self,
        required: RuleId,
        pattern: RuleId,
        path: FieldPath,
        value: Option<&str>,
    ) -> bool {
        if !self.require(required, path.clone(), value, None) {
            return false;
        }
        let id = value.unwrap_or_default();
        if is_valid_id(id) {
            return true;
        }
        self.report(
            pattern,
            path,
            format!("with value '{id}' does not match a valid id pattern."),
        );
        false
    }

    /// Number of findings recorded so far.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no findings were recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consumes self and returns the findings in recording order.
    pub fn into_inner(self) -> Vec<Finding> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_count_matches_all() {
        assert_eq!(RuleId::all().len(), RULE_COUNT);
    }

    #[test]
    fn test_index_matches_position() {
        for (i, rule) in RuleId::all().iter().enumerate() {
            assert_eq!(rule.index(), i, "{rule} is out of place");
        }
    }

    #[test]
    fn test_rule_names_unique() {
        let mut seen = std::collections::HashSet::new();
        for rule in RuleId::all() {
            assert!(seen.insert(rule.as_str()), "Duplicate rule name: {rule}");
        }
    }

    #[test]
    fn test_valid_ids() {
        for id in ["org.apache.maven", "my-app", "my_app", "A1.b2-c3_d4"] {
            assert!(is_valid_id(id), "{id} should be valid");
        }
    }

    #[test]
    fn test_invalid_ids() {
        for id in ["o/a/m", "m$-do$", "a b", "a\\b", "", "g:a", "${project.groupId}"] {
            assert!(!is_valid_id(id), "{id} should be invalid");
        }
    }

    #[test]
    fn test_require_missing_without_hint() {
        let mut findings = Findings::new();
        assert!(!findings.require(
            RuleId::CoordinateRequired,
            FieldPath::root("version"),
            None,
            None
        ));
        let items = findings.into_inner();
        assert_eq!(items[0].to_string(), "'version' is missing.");
    }

    #[test]
    fn test_require_blank_with_hint() {
        let mut findings = Findings::new();
        findings.require(
            RuleId::PluginVersion,
            FieldPath::root("build").nested("plugins", "plugin").field("version"),
            Some("  "),
            Some("org.example:demo-plugin"),
        );
        let items = findings.into_inner();
        assert_eq!(
            items[0].to_string(),
            "'build.plugins.plugin.version' is missing for org.example:demo-plugin"
        );
    }

    #[test]
    fn test_require_present() {
        let mut findings = Findings::new();
        assert!(findings.require(
            RuleId::CoordinateRequired,
            FieldPath::root("version"),
            Some("1.0"),
            None
        ));
        assert!(findings.is_empty());
    }

    #[test]
    fn test_require_id_missing_reports_only_required() {
        let mut findings = Findings::new();
        findings.require_id(
            RuleId::CoordinateRequired,
            RuleId::CoordinatePattern,
            FieldPath::root("groupId"),
            Some(""),
        );
        let items = findings.into_inner();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].rule, RuleId::CoordinateRequired);
    }

    #[test]
    fn test_require_id_malformed() {
        let mut findings = Findings::new();
        findings.require_id(
            RuleId::CoordinateRequired,
            RuleId::CoordinatePattern,
            FieldPath::root("groupId"),
            Some("o/a/m"),
        );
        let items = findings.into_inner();
        assert_eq!(items[0].rule, RuleId::CoordinatePattern);
        assert_eq!(
            items[0].to_string(),
            "'groupId' with value 'o/a/m' does not match a valid id pattern."
        );
    }
}
