//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the one git query
//! git-buildver needs, allowing for multiple implementations including real
//! repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [SourceControl] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_buildver::git::{DescribeRequest, SourceControl};
//! # fn example<S: SourceControl>(repo: &S) -> Result<(), Box<dyn std::error::Error>> {
//! let describe = repo.describe(&DescribeRequest::default())?;
//! println!("HEAD is {}", describe);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{Git2Repository, Probe};

use crate::error::Result;

/// Options for describing the current commit, mirroring
/// `git describe --tags --dirty --broken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeRequest {
    /// Use any tag, including lightweight ones
    pub tags: bool,
    /// Append `dirty_suffix` when tracked files are modified
    pub dirty: bool,
    /// Append `broken_suffix` instead of failing when the working tree
    /// cannot be inspected
    pub broken: bool,
    pub dirty_suffix: String,
    pub broken_suffix: String,
}

impl Default for DescribeRequest {
    fn default() -> Self {
        DescribeRequest {
            tags: true,
            dirty: true,
            broken: true,
            dirty_suffix: "-dirty".to_string(),
            broken_suffix: "-broken".to_string(),
        }
    }
}

/// Read-only source-control query used for version resolution.
///
/// ## Error Handling
///
/// Implementations return [crate::error::Result<T>]; failures are fatal for
/// the resolution. Recoverable "no history here" situations are detected
/// before a `SourceControl` exists (see [Git2Repository::probe]).
pub trait SourceControl {
    /// Describe the current commit relative to its nearest reachable tag.
    ///
    /// # Returns
    /// * `Ok(String)` - e.g. `v1.4.0`, `v1.4.0-7-gdeadbee-dirty`
    /// * `Err` - If no tag is reachable or the repository cannot be read
    fn describe(&self, request: &DescribeRequest) -> Result<String>;
}
