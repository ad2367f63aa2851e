//! Domain logic - pure version derivation independent of git operations

pub mod docs;
pub mod version;

pub use docs::DocBuildOptions;
pub use version::{normalize_describe, ReleaseScheme, RepositoryState, VersionInfo};
