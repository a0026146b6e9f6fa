//! # pomcheck-core — Descriptor Model Types
//!
//! This crate defines the in-memory tree of project metadata that the
//! validator inspects. Every other crate in the workspace depends on
//! `pomcheck-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Absent is not blank.** Optional scalar fields are `Option<String>`.
//!    `None` means the author never wrote the element; `Some("")` means the
//!    element was written empty. Defaults (`jar` packaging, `jar` dependency
//!    type) are only applied by the effective accessors, never by the raw
//!    field.
//!
//! 2. **Absent collections are empty.** Every sequence deserializes to an
//!    empty `Vec` when missing, so checks never branch on collection presence.
//!
//! 3. **Single `ValidationLevel` enum.** One totally ordered definition of the
//!    compatibility tiers. Adding a tier forces every exhaustive `match` to
//!    handle it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pomcheck-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public model types derive `Debug`, `Clone`, `Default`, and
//!   implement `Serialize`/`Deserialize` with camelCase field names.

pub mod artifact;
pub mod error;
pub mod level;
pub mod model;

// Re-export primary types for ergonomic imports.
pub use artifact::{Dependency, Plugin, ReportPlugin, DEFAULT_PLUGIN_GROUP_ID, DEFAULT_TYPE};
pub use error::PomcheckError;
pub use level::{ValidationLevel, VALIDATION_LEVEL_COUNT};
pub use model::{
    Build, DependencyManagement, DistributionManagement, Model, Parent, PluginManagement,
    Reporting, RepositoryRef, Resource, AGGREGATOR_PACKAGING, DEFAULT_PACKAGING,
    SUPPORTED_MODEL_VERSION,
};
