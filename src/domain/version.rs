use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::boundary::BoundaryWarning;

static LEADING_NON_DIGITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^0-9]*").expect("static leading non-digit pattern is valid")
});

/// Strips the leading run of non-digit characters from a describe string.
///
/// Tag naming prefixes such as `v` or `release-` disappear, everything after
/// the first digit stays untouched. Strings that start with a digit are
/// returned unchanged.
///
/// # Example
/// ```
/// use git_buildver::domain::normalize_describe;
///
/// assert_eq!(normalize_describe("v2.1.0"), "2.1.0");
/// assert_eq!(normalize_describe("rel-5-2.0.0-3-gabc123"), "5-2.0.0-3-gabc123");
/// assert_eq!(normalize_describe("2.1.0-tag"), "2.1.0-tag");
/// ```
pub fn normalize_describe(describe: &str) -> String {
    LEADING_NON_DIGITS.replacen(describe, 1, "").into_owned()
}

/// How a post-tag describe string turns into a development release.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReleaseScheme {
    /// Marks "N commits past the nearest tag" in a describe string
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Inserted between the base version and the build timestamp
    #[serde(default = "default_dev_marker")]
    pub dev_marker: String,
}

fn default_separator() -> char {
    '-'
}

fn default_dev_marker() -> String {
    ".dev".to_string()
}

impl Default for ReleaseScheme {
    fn default() -> Self {
        ReleaseScheme {
            separator: default_separator(),
            dev_marker: default_dev_marker(),
        }
    }
}

/// What was found when inspecting the working directory.
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryState {
    /// No usable source-control metadata; the fallback version applies
    Absent { reason: BoundaryWarning },
    /// Raw (not yet normalized) describe output of the working tree
    Present { describe: String },
}

/// The resolved version triple stamped into a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub release: String,
    pub git_describe: String,
}

impl VersionInfo {
    /// Version info for a build without usable history.
    pub fn fallback(fallback_version: &str) -> Self {
        VersionInfo {
            version: fallback_version.to_string(),
            release: fallback_version.to_string(),
            git_describe: String::new(),
        }
    }

    /// Derives version and release from a raw describe string.
    ///
    /// `timestamp` is only used when the describe string lies past its tag.
    pub fn from_describe(describe: &str, scheme: &ReleaseScheme, timestamp: i64) -> Self {
        let git_describe = normalize_describe(describe);

        let (version, release) = match git_describe.split_once(scheme.separator) {
            Some((base, _)) => (
                base.to_string(),
                format!("{}{}{}", base, scheme.dev_marker, timestamp),
            ),
            None => (git_describe.clone(), git_describe.clone()),
        };

        VersionInfo {
            version,
            release,
            git_describe,
        }
    }

    /// Whether the build sits exactly on a tag (or had no history at all).
    pub fn is_release(&self) -> bool {
        self.version == self.release
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.release, self.git_describe)
    }
}
