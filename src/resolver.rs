//! Release version resolution from repository tag state.
//!
//! [`VersionResolver::resolve`] inspects a working directory once, reads the
//! clock at most once, and produces a [`VersionInfo`]. Directories without usable
//! history resolve to the fallback version; every other failure propagates.

use std::path::Path;

use crate::config::Config;
use crate::domain::{ReleaseScheme, RepositoryState, VersionInfo};
use crate::error::Result;
use crate::git::{DescribeRequest, Git2Repository, Probe, SourceControl};

/// Source of the build timestamp embedded in development releases.
pub trait Clock {
    /// Current wall-clock time in whole seconds since the Unix epoch
    fn now_secs(&self) -> i64;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_secs(&self) -> i64 {
        self.0
    }
}

/// Derives `(version, release)` from the tag state of a working directory.
#[derive(Debug, Clone)]
pub struct VersionResolver<C: Clock = SystemClock> {
    request: DescribeRequest,
    scheme: ReleaseScheme,
    discover: bool,
    clock: C,
}

impl VersionResolver<SystemClock> {
    pub fn new() -> Self {
        VersionResolver {
            request: DescribeRequest::default(),
            scheme: ReleaseScheme::default(),
            discover: false,
            clock: SystemClock,
        }
    }

    /// Resolver honouring the `[describe]` and `[release]` tables.
    pub fn from_config(config: &Config) -> Self {
        VersionResolver {
            request: config.describe.request(),
            scheme: config.release.clone(),
            discover: config.describe.discover,
            clock: SystemClock,
        }
    }
}

impl Default for VersionResolver<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> VersionResolver<C> {
    /// Replace the clock, e.g. with a [`FixedClock`] in tests.
    pub fn with_clock<D: Clock>(self, clock: D) -> VersionResolver<D> {
        VersionResolver {
            request: self.request,
            scheme: self.scheme,
            discover: self.discover,
            clock,
        }
    }

    pub fn with_request(mut self, request: DescribeRequest) -> Self {
        self.request = request;
        self
    }

    pub fn with_scheme(mut self, scheme: ReleaseScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Search parent directories for the repository as well.
    pub fn with_discover(mut self, discover: bool) -> Self {
        self.discover = discover;
        self
    }

    /// Resolves the version of the working tree at `path`.
    ///
    /// # Returns
    /// * `Ok(VersionInfo)` - Derived from tags, or `fallback_version` when
    ///   `path` carries no usable git history
    /// * `Err` - If `path` does not exist or describing the repository fails
    pub fn resolve<P: AsRef<Path>>(&self, path: P, fallback_version: &str) -> Result<VersionInfo> {
        let state = self.inspect(path)?;
        Ok(self.resolve_state(&state, fallback_version))
    }

    /// Inspects `path` without deriving a version.
    pub fn inspect<P: AsRef<Path>>(&self, path: P) -> Result<RepositoryState> {
        match Git2Repository::probe(path, self.discover)? {
            Probe::Usable(repo) => self.inspect_source(&repo),
            Probe::Unusable(reason) => {
                tracing::info!(%reason, "no usable git history, using fallback version");
                Ok(RepositoryState::Absent { reason })
            }
        }
    }

    /// Inspects an already opened source.
    pub fn inspect_source<S: SourceControl>(&self, source: &S) -> Result<RepositoryState> {
        let describe = source.describe(&self.request)?;
        tracing::debug!(%describe, "described working tree");
        Ok(RepositoryState::Present { describe })
    }

    /// Turns an inspected state into the version triple.
    pub fn resolve_state(&self, state: &RepositoryState, fallback_version: &str) -> VersionInfo {
        match state {
            RepositoryState::Absent { .. } => VersionInfo::fallback(fallback_version),
            RepositoryState::Present { describe } => {
                VersionInfo::from_describe(describe, &self.scheme, self.clock.now_secs())
            }
        }
    }
}
