//! # Artifact References
//!
//! Dependencies, build plugins, and report plugins: the elements of a
//! descriptor that point at other artifacts by coordinates.

use serde::{Deserialize, Serialize};

/// Dependency type assumed when none is declared.
pub const DEFAULT_TYPE: &str = "jar";

/// Plugin group assumed when a plugin declares no `groupId`.
pub const DEFAULT_PLUGIN_GROUP_ID: &str = "org.apache.maven.plugins";

/// A declared dependency, either direct or under dependency management.
///
/// Identity is the `(groupId, artifactId)` pair. Uniqueness across a
/// descriptor is not a property of this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dependency {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub classifier: Option<String>,
    pub scope: Option<String>,
    pub system_path: Option<String>,
    pub optional: Option<bool>,
}

impl Dependency {
    /// Create a dependency with the given coordinates.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// The dependency type, falling back to [`DEFAULT_TYPE`] when undeclared.
    ///
    /// A type declared as an empty string is returned as-is so that a blank
    /// element remains distinguishable from an absent one.
    pub fn type_or_default(&self) -> &str {
        self.type_.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    /// `groupId:artifactId:type[:classifier]`, the key dependency
    /// management matches on.
    pub fn management_key(&self) -> String {
        let mut key = format!(
            "{}:{}:{}",
            self.group_id.as_deref().unwrap_or_default(),
            self.artifact_id.as_deref().unwrap_or_default(),
            self.type_or_default()
        );
        if let Some(classifier) = self.classifier.as_deref().filter(|c| !c.is_empty()) {
            key.push(':');
            key.push_str(classifier);
        }
        key
    }
}

/// A build plugin declared under `build.plugins` or
/// `build.pluginManagement.plugins`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Plugin {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub inherited: Option<bool>,
    pub extensions: Option<bool>,
}

impl Plugin {
    /// Create a plugin with the given coordinates and no version.
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: Some(group_id.into()),
            artifact_id: Some(artifact_id.into()),
            ..Self::default()
        }
    }

    /// Builder-style version setter.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// The plugin group, falling back to [`DEFAULT_PLUGIN_GROUP_ID`] when
    /// undeclared.
    pub fn group_id_or_default(&self) -> &str {
        self.group_id.as_deref().unwrap_or(DEFAULT_PLUGIN_GROUP_ID)
    }

    /// `groupId:artifactId` coordinates used in diagnostics.
    pub fn key(&self) -> String {
        format!(
            "{}:{}",
            self.group_id_or_default(),
            self.artifact_id.as_deref().unwrap_or_default()
        )
    }
}

/// A report plugin declared under `reporting.plugins`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportPlugin {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub version: Option<String>,
}

impl ReportPlugin {
    /// The plugin group, falling back to [`DEFAULT_PLUGIN_GROUP_ID`] when
    /// undeclared.
    pub fn group_id_or_default(&self) -> &str {
        self.group_id.as_deref().unwrap_or(DEFAULT_PLUGIN_GROUP_ID)
    }
}
