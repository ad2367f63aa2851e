use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ReleaseScheme;
use crate::error::Result;
use crate::git::DescribeRequest;

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "buildver.toml";

/// File name looked up in the user configuration directory.
pub const USER_CONFIG_FILE: &str = ".buildver.toml";

/// Represents the complete configuration for git-buildver.
///
/// Contains package identity, describe options, the release scheme and the
/// documentation build settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub describe: DescribeConfig,

    #[serde(default)]
    pub release: ReleaseScheme,

    #[serde(default)]
    pub docs: DocsConfig,
}

/// Package identity and the version used when no history is available.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageConfig {
    #[serde(default = "default_package_name")]
    pub name: String,

    #[serde(default = "default_fallback_version")]
    pub fallback_version: String,
}

fn default_package_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_fallback_version() -> String {
    "0.0.0".to_string()
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            name: default_package_name(),
            fallback_version: default_fallback_version(),
        }
    }
}

/// Options for the describe query against the working tree.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DescribeConfig {
    /// Consider lightweight tags, not only annotated ones
    #[serde(default = "default_true")]
    pub tags: bool,

    #[serde(default = "default_true")]
    pub dirty: bool,

    #[serde(default = "default_true")]
    pub broken: bool,

    #[serde(default = "default_dirty_suffix")]
    pub dirty_suffix: String,

    #[serde(default = "default_broken_suffix")]
    pub broken_suffix: String,

    /// Search parent directories for the repository
    #[serde(default)]
    pub discover: bool,
}

fn default_true() -> bool {
    true
}

fn default_dirty_suffix() -> String {
    "-dirty".to_string()
}

fn default_broken_suffix() -> String {
    "-broken".to_string()
}

impl Default for DescribeConfig {
    fn default() -> Self {
        DescribeConfig {
            tags: true,
            dirty: true,
            broken: true,
            dirty_suffix: default_dirty_suffix(),
            broken_suffix: default_broken_suffix(),
            discover: false,
        }
    }
}

impl DescribeConfig {
    pub fn request(&self) -> DescribeRequest {
        DescribeRequest {
            tags: self.tags,
            dirty: self.dirty,
            broken: self.broken,
            dirty_suffix: self.dirty_suffix.clone(),
            broken_suffix: self.broken_suffix.clone(),
        }
    }
}

/// Settings handed through to the documentation generator.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DocsConfig {
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// Output format of the generator, e.g. "man"
    #[serde(default = "default_builder")]
    pub builder: String,
}

fn default_source_dir() -> String {
    "Documentation".to_string()
}

fn default_builder() -> String {
    "man".to_string()
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig {
            source_dir: default_source_dir(),
            builder: default_builder(),
        }
    }
}

/// Returns the configuration file that [`load_config`] would read.
pub fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `buildver.toml` in current directory
/// 3. `.buildver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            let config_str = fs::read_to_string(&path)?;
            parse_config(&config_str)
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parses configuration from a TOML string.
pub fn parse_config(config_str: &str) -> Result<Config> {
    Ok(toml::from_str(config_str)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_tables_keep_defaults() {
        let config = parse_config(
            r#"
[package]
fallback_version = "0.3"

[describe]
dirty = false
"#,
        )
        .unwrap();

        assert_eq!(config.package.name, "git-buildver");
        assert_eq!(config.package.fallback_version, "0.3");
        assert!(!config.describe.dirty);
        assert!(config.describe.tags);
        assert_eq!(config.describe.dirty_suffix, "-dirty");
        assert_eq!(config.release.dev_marker, ".dev");
    }

    #[test]
    fn test_release_separator_char() {
        let config = parse_config("[release]\nseparator = \"+\"\n").unwrap();
        assert_eq!(config.release.separator, '+');
    }

    #[test]
    fn test_invalid_separator_rejected() {
        assert!(parse_config("[release]\nseparator = \"--\"\n").is_err());
    }

    #[test]
    fn test_request_from_describe_config() {
        let describe = DescribeConfig {
            broken: false,
            dirty_suffix: "+mod".to_string(),
            ..DescribeConfig::default()
        };
        let request = describe.request();
        assert!(request.tags);
        assert!(request.dirty);
        assert!(!request.broken);
        assert_eq!(request.dirty_suffix, "+mod");
    }

    #[test]
    fn test_explicit_path_is_located_even_if_missing() {
        let located = locate_config(Some("/nonexistent/buildver.toml"));
        assert_eq!(located, Some(PathBuf::from("/nonexistent/buildver.toml")));
        assert!(load_config(Some("/nonexistent/buildver.toml")).is_err());
    }
}
