//! # Rule Catalog
//!
//! The ordered list of structural checks. Each entry is a pure function from
//! a model to findings, tagged with the views it applies to. The order of
//! [`CATALOG`] is the order findings appear in a validation result:
//!
//! 1. Project identity (`modelVersion`, `groupId`, `artifactId`,
//!    `packaging`, `version`)
//! 2. Parent reference
//! 3. Dependencies, then dependency management
//! 4. Build plugins, plugin management, resources, test resources,
//!    report plugins
//! 5. Repositories, plugin repositories, distribution management
//! 6. Modules
//!
//! Checks never look at the validation level and never receive a mode flag.
//! Where the raw and effective views need different behavior for the same
//! field, the catalog carries two entries with different [`Views`].

use std::collections::HashSet;

use pomcheck_core::{
    Dependency, Model, Plugin, RepositoryRef, Resource, AGGREGATOR_PACKAGING,
    SUPPORTED_MODEL_VERSION,
};

use crate::finding::{Findings, RuleId};
use crate::path::FieldPath;

/// The descriptor view a validation pass runs over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// As authored, before inheritance and interpolation.
    Raw,
    /// After inheritance and interpolation.
    Effective,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Effective => "effective",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which views a catalog entry runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Views {
    RawOnly,
    EffectiveOnly,
    Both,
}

impl Views {
    /// Whether an entry tagged `self` runs in `view`.
    pub fn includes(self, view: View) -> bool {
        matches!(
            (self, view),
            (Self::Both, _) | (Self::RawOnly, View::Raw) | (Self::EffectiveOnly, View::Effective)
        )
    }
}

/// One catalog entry.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short name for log events.
    pub name: &'static str,
    /// Views this entry runs in.
    pub views: Views,
    check: fn(&Model, &mut Findings),
}

impl Rule {
    const fn new(name: &'static str, views: Views, check: fn(&Model, &mut Findings)) -> Self {
        Self { name, views, check }
    }

    /// Run this entry against `model`, appending to `out`.
    pub fn run(&self, model: &Model, out: &mut Findings) {
        (self.check)(model, out);
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("views", &self.views)
            .finish_non_exhaustive()
    }
}

/// The full ordered catalog.
pub static CATALOG: &[Rule] = &[
    Rule::new("model-version", Views::Both, model_version),
    Rule::new("model-version-supported", Views::RawOnly, model_version_supported),
    Rule::new("raw-group-id", Views::RawOnly, raw_group_id),
    Rule::new("group-id", Views::EffectiveOnly, group_id),
    Rule::new("raw-artifact-id", Views::RawOnly, raw_artifact_id),
    Rule::new("artifact-id", Views::EffectiveOnly, artifact_id),
    Rule::new("packaging", Views::EffectiveOnly, packaging),
    Rule::new("version", Views::Both, version),
    Rule::new("parent", Views::RawOnly, parent),
    Rule::new("dependencies", Views::EffectiveOnly, dependencies),
    Rule::new("dependency-management", Views::EffectiveOnly, dependency_management),
    Rule::new("build-plugins", Views::EffectiveOnly, build_plugins),
    Rule::new("plugin-management", Views::RawOnly, plugin_management),
    Rule::new("resources", Views::EffectiveOnly, resources),
    Rule::new("report-plugins", Views::EffectiveOnly, report_plugins),
    Rule::new("repositories", Views::Both, repositories),
    Rule::new("distribution-repositories", Views::EffectiveOnly, distribution_repositories),
    Rule::new("distribution-status", Views::RawOnly, distribution_status),
    Rule::new("modules", Views::EffectiveOnly, modules),
];

/// Catalog entries that run in `view`, in catalog order.
pub fn rules_for(view: View) -> impl Iterator<Item = &'static Rule> {
    CATALOG.iter().filter(move |rule| rule.views.includes(view))
}

// ---------------------------------------------------------------------------
// Project identity
// ---------------------------------------------------------------------------

fn model_version(model: &Model, out: &mut Findings) {
    out.require(
        RuleId::ModelVersionRequired,
        FieldPath::root("modelVersion"),
        model.model_version.as_deref(),
        None,
    );
}

fn model_version_supported(model: &Model, out: &mut Findings) {
    let Some(found) = model.model_version.as_deref().filter(|v| !v.trim().is_empty()) else {
        return;
    };
    if found != SUPPORTED_MODEL_VERSION {
        out.report(
            RuleId::ModelVersionSupported,
            FieldPath::root("modelVersion"),
            format!("must be one of [{SUPPORTED_MODEL_VERSION}] but is '{found}'."),
        );
    }
}

// Raw values may still contain expressions.
fn raw_group_id(model: &Model, out: &mut Findings) {
    out.require(
        RuleId::CoordinateRequired,
        FieldPath::root("groupId"),
        model.group_id.as_deref(),
        None,
    );
}

fn group_id(model: &Model, out: &mut Findings) {
    out.require_id(
        RuleId::CoordinateRequired,
        RuleId::CoordinatePattern,
        FieldPath::root("groupId"),
        model.group_id.as_deref(),
    );
}

fn raw_artifact_id(model: &Model, out: &mut Findings) {
    out.require(
        RuleId::CoordinateRequired,
        FieldPath::root("artifactId"),
        model.artifact_id.as_deref(),
        None,
    );
}

fn artifact_id(model: &Model, out: &mut Findings) {
    out.require_id(
        RuleId::CoordinateRequired,
        RuleId::CoordinatePattern,
        FieldPath::root("artifactId"),
        model.artifact_id.as_deref(),
    );
}

fn packaging(model: &Model, out: &mut Findings) {
    out.require(
        RuleId::PackagingRequired,
        FieldPath::root("packaging"),
        Some(model.packaging_or_default()),
        None,
    );
}

fn version(model: &Model, out: &mut Findings) {
    out.require(
        RuleId::CoordinateRequired,
        FieldPath::root("version"),
        model.version.as_deref(),
        None,
    );
}

// ---------------------------------------------------------------------------
// Parent
// ---------------------------------------------------------------------------

fn parent(model: &Model, out: &mut Findings) {
    let Some(parent) = &model.parent else {
        return;
    };
    let path = FieldPath::root("parent");
    for (field, value) in [
        ("groupId", &parent.group_id),
        ("artifactId", &parent.artifact_id),
        ("version", &parent.version),
    ] {
        out.require(RuleId::ParentCoordinates, path.field(field), value.as_deref(), None);
    }

    let same_group = parent.group_id.is_some() && parent.group_id == model.group_id;
    let same_artifact = parent.artifact_id.is_some() && parent.artifact_id == model.artifact_id;
    if same_group && same_artifact {
        out.report(
            RuleId::ParentSelfReference,
            path.field("artifactId"),
            "must be changed, the parent element cannot have the same groupId:artifactId as the project.",
        );
    }
}

// ---------------------------------------------------------------------------
// Dependencies
// ---------------------------------------------------------------------------

const VALID_SCOPES: [&str; 5] = ["provided", "compile", "runtime", "test", "system"];

fn dependencies(model: &Model, out: &mut Findings) {
    let prefix = FieldPath::collection("dependencies", "dependency");
    for dep in &model.dependencies {
        check_dependency(dep, &prefix, false, out);
    }
}

fn dependency_management(model: &Model, out: &mut Findings) {
    let prefix = FieldPath::root("dependencyManagement").nested("dependencies", "dependency");
    for dep in model.managed_dependencies() {
        check_dependency(dep, &prefix, true, out);
    }
}

fn check_dependency(dep: &Dependency, prefix: &FieldPath, managed: bool, out: &mut Findings) {
    out.require_id(
        RuleId::DependencyCoordinates,
        RuleId::DependencyPattern,
        prefix.field("artifactId"),
        dep.artifact_id.as_deref(),
    );
    out.require_id(
        RuleId::DependencyCoordinates,
        RuleId::DependencyPattern,
        prefix.field("groupId"),
        dep.group_id.as_deref(),
    );

    let key = dep.management_key();
    if !managed {
        // Type, version and scope may be left to dependency management.
        out.require(
            RuleId::DependencyCoordinates,
            prefix.field("type"),
            Some(dep.type_or_default()),
            Some(&key),
        );
        out.require(
            RuleId::DependencyCoordinates,
            prefix.field("version"),
            dep.version.as_deref(),
            Some(&key),
        );
    }

    let system_path = dep.system_path.as_deref().filter(|p| !p.trim().is_empty());
    if dep.scope.as_deref() == Some("system") {
        out.require(
            RuleId::DependencySystemPath,
            prefix.field("systemPath"),
            system_path,
            Some(&key),
        );
    } else if system_path.is_some() {
        out.report(
            RuleId::DependencySystemPath,
            prefix.field("systemPath"),
            "must be omitted. This field may only be specified for a dependency with system scope.",
        );
    }

    if !managed {
        if let Some(scope) = dep.scope.as_deref() {
            if !VALID_SCOPES.contains(&scope) {
                out.report(
                    RuleId::DependencyScope,
                    prefix.field("scope"),
                    format!(
                        "for {key} must be one of [{}] but is '{scope}'.",
                        VALID_SCOPES.join(", ")
                    ),
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Build
// ---------------------------------------------------------------------------

fn build_plugins(model: &Model, out: &mut Findings) {
    let prefix = FieldPath::root("build").nested("plugins", "plugin");
    for plugin in model.build_plugins() {
        check_plugin_coordinates(plugin, &prefix, RuleId::PluginCoordinates, out);
        out.require(
            RuleId::PluginVersion,
            prefix.field("version"),
            plugin.version.as_deref(),
            Some(&plugin.key()),
        );
    }
}

fn plugin_management(model: &Model, out: &mut Findings) {
    let prefix = FieldPath::root("build")
        .field("pluginManagement")
        .nested("plugins", "plugin");
    for plugin in model.managed_plugins() {
        check_plugin_coordinates(plugin, &prefix, RuleId::PluginManagementCoordinates, out);
    }
}

fn check_plugin_coordinates(plugin: &Plugin, prefix: &FieldPath, rule: RuleId, out: &mut Findings) {
    out.require(rule, prefix.field("artifactId"), plugin.artifact_id.as_deref(), None);
    out.require(rule, prefix.field("groupId"), Some(plugin.group_id_or_default()), None);
}

fn resources(model: &Model, out: &mut Findings) {
    let Some(build) = &model.build else {
        return;
    };
    let build_path = FieldPath::root("build");
    check_resources(&build.resources, &build_path.nested("resources", "resource"), out);
    check_resources(
        &build.test_resources,
        &build_path.nested("testResources", "testResource"),
        out,
    );
}

fn check_resources(resources: &[Resource], prefix: &FieldPath, out: &mut Findings) {
    for resource in resources {
        out.require(
            RuleId::ResourceDirectory,
            prefix.field("directory"),
            resource.directory.as_deref(),
            None,
        );
    }
}

fn report_plugins(model: &Model, out: &mut Findings) {
    let prefix = FieldPath::root("reporting").nested("plugins", "plugin");
    for plugin in model.report_plugins() {
        out.require(
            RuleId::ReportPluginCoordinates,
            prefix.field("artifactId"),
            plugin.artifact_id.as_deref(),
            None,
        );
        out.require(
            RuleId::ReportPluginCoordinates,
            prefix.field("groupId"),
            Some(plugin.group_id_or_default()),
            None,
        );
    }
}

// ---------------------------------------------------------------------------
// Repositories
// ---------------------------------------------------------------------------

fn repositories(model: &Model, out: &mut Findings) {
    let repos = FieldPath::collection("repositories", "repository");
    for repo in &model.repositories {
        check_repository(repo, &repos, out);
    }
    let plugin_repos = FieldPath::collection("pluginRepositories", "pluginRepository");
    for repo in &model.plugin_repositories {
        check_repository(repo, &plugin_repos, out);
    }
}

fn distribution_repositories(model: &Model, out: &mut Findings) {
    let Some(dist) = &model.distribution_management else {
        return;
    };
    let path = FieldPath::root("distributionManagement");
    if let Some(repo) = &dist.repository {
        check_repository(repo, &path.field("repository"), out);
    }
    if let Some(repo) = &dist.snapshot_repository {
        check_repository(repo, &path.field("snapshotRepository"), out);
    }
}

fn check_repository(repo: &RepositoryRef, prefix: &FieldPath, out: &mut Findings) {
    out.require(RuleId::RepositoryCoordinates, prefix.field("id"), repo.id.as_deref(), None);
    out.require(RuleId::RepositoryCoordinates, prefix.field("url"), repo.url.as_deref(), None);
}

fn distribution_status(model: &Model, out: &mut Findings) {
    let status = model
        .distribution_management
        .as_ref()
        .and_then(|d| d.status.as_deref());
    if status.is_some() {
        out.report(
            RuleId::DistributionStatus,
            FieldPath::root("distributionManagement").field("status"),
            "must not be specified.",
        );
    }
}

// ---------------------------------------------------------------------------
// Modules
// ---------------------------------------------------------------------------

fn modules(model: &Model, out: &mut Findings) {
    if !model.is_aggregator() {
        return;
    }

    let packaging = model.packaging_or_default();
    if packaging != AGGREGATOR_PACKAGING {
        out.report(
            RuleId::AggregatorPackaging,
            FieldPath::root("packaging"),
            format!(
                "with value '{packaging}' is invalid. Aggregator projects require '{AGGREGATOR_PACKAGING}' as packaging."
            ),
        );
    }

    let module_path = FieldPath::collection("modules", "module");
    let mut seen = HashSet::new();
    for (i, module) in model.modules.iter().enumerate() {
        if module.trim().is_empty() {
            out.report(
                RuleId::ModulePath,
                module_path.indexed(i),
                "has been specified without a path to the project directory.",
            );
        } else if !seen.insert(module.as_str()) {
            out.report(
                RuleId::ModuleDuplicate,
                module_path.indexed(i),
                format!("specifies duplicate child module {module}"),
            );
        }
    }
}
