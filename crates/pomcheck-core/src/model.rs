//! # Descriptor Model
//!
//! The in-memory tree of project metadata under validation. The same type
//! represents both views of a descriptor:
//!
//! - the **raw** model, exactly as the author wrote it, and
//! - the **effective** model, after inheritance and interpolation have run.
//!
//! Which view a `Model` instance represents is decided by whoever built it.
//! The validator never converts between the two and never mutates a model.
//!
//! Field names serialize in camelCase (`modelVersion`, `groupId`,
//! `dependencyManagement`, ...) so descriptors can be materialized from
//! JSON or YAML by collaborators and fixtures.

use serde::{Deserialize, Serialize};

use crate::artifact::{Dependency, Plugin, ReportPlugin};

/// Packaging assumed when a descriptor declares none.
pub const DEFAULT_PACKAGING: &str = "jar";

/// The packaging aggregator projects must declare.
pub const AGGREGATOR_PACKAGING: &str = "pom";

/// The only descriptor model version this validator understands.
pub const SUPPORTED_MODEL_VERSION: &str = "4.0.0";

/// A project descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Model {
    /// Descriptor schema version, `4.0.0` for every supported descriptor.
    pub model_version: Option<String>,
    /// Reference to the descriptor this one inherits from.
    pub parent: Option<Parent>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    /// Declared packaging. See [`Model::packaging_or_default`].
    pub packaging: Option<String>,
    /// Sub-project directories. Non-empty only for aggregator projects.
    pub modules: Vec<String>,
    pub dependencies: Vec<Dependency>,
    pub dependency_management: Option<DependencyManagement>,
    pub build: Option<Build>,
    pub reporting: Option<Reporting>,
    pub repositories: Vec<RepositoryRef>,
    pub plugin_repositories: Vec<RepositoryRef>,
    pub distribution_management: Option<DistributionManagement>,
}

impl Model {
    /// Create a descriptor with the supported model version and the given
    /// identity. Packaging is left undeclared.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            model_version: Some(SUPPORTED_MODEL_VERSION.to_string()),
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// The packaging as seen in the effective view: [`DEFAULT_PACKAGING`]
    /// when undeclared.
    ///
    /// A packaging declared as an empty string is returned unchanged; an
    /// explicitly blank element is not the same as an absent one.
    pub fn packaging_or_default(&self) -> &str {
        self.packaging.as_deref().unwrap_or(DEFAULT_PACKAGING)
    }

    /// Whether this descriptor groups sub-projects.
    pub fn is_aggregator(&self) -> bool {
        !self.modules.is_empty()
    }

    /// Dependencies declared under `dependencyManagement`, empty when the
    /// section is absent.
    pub fn managed_dependencies(&self) -> &[Dependency] {
        self.dependency_management
            .as_ref()
            .map(|m| m.dependencies.as_slice())
            .unwrap_or_default()
    }

    /// Plugins declared under `build.plugins`, empty when there is no build.
    pub fn build_plugins(&self) -> &[Plugin] {
        self.build
            .as_ref()
            .map(|b| b.plugins.as_slice())
            .unwrap_or_default()
    }

    /// Plugins declared under `build.pluginManagement.plugins`.
    pub fn managed_plugins(&self) -> &[Plugin] {
        self.build
            .as_ref()
            .and_then(|b| b.plugin_management.as_ref())
            .map(|m| m.plugins.as_slice())
            .unwrap_or_default()
    }

    /// Plugins declared under `reporting.plugins`.
    pub fn report_plugins(&self) -> &[ReportPlugin] {
        self.reporting
            .as_ref()
            .map(|r| r.plugins.as_slice())
            .unwrap_or_default()
    }
}

/// Reference to the descriptor a project inherits from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parent {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub relative_path: Option<String>,
}

/// The `dependencyManagement` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependencyManagement {
    pub dependencies: Vec<Dependency>,
}

/// The `build` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Build {
    pub plugins: Vec<Plugin>,
    pub plugin_management: Option<PluginManagement>,
    pub resources: Vec<Resource>,
    pub test_resources: Vec<Resource>,
}

/// The `build.pluginManagement` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginManagement {
    pub plugins: Vec<Plugin>,
}

/// A resource directory copied into the build output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Resource {
    pub directory: Option<String>,
    pub target_path: Option<String>,
    pub filtering: Option<bool>,
}

impl Resource {
    /// Create a resource rooted at `directory`.
    pub fn new(directory: impl Into<String>) -> Self {
        Self {
            directory: Some(directory.into()),
            ..Self::default()
        }
    }
}

/// The `reporting` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reporting {
    pub plugins: Vec<ReportPlugin>,
}

/// A remote repository reference, used for artifact repositories, plugin
/// repositories, and distribution targets alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepositoryRef {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub layout: Option<String>,
}

impl RepositoryRef {
    /// Create a repository reference with the given id and url.
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// The `distributionManagement` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistributionManagement {
    pub repository: Option<RepositoryRef>,
    pub snapshot_repository: Option<RepositoryRef>,
    /// Written by repository managers after deployment. Authors must never
    /// set it.
    pub status: Option<String>,
}
