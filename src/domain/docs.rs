use serde::Serialize;

use crate::config::DocsConfig;
use crate::domain::VersionInfo;
use crate::error::Result;

/// Options a documentation generator is invoked with.
///
/// `version` and `release` are copied literally from the resolved
/// [`VersionInfo`], so manual pages carry the same strings as the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocBuildOptions {
    pub project: String,
    pub version: String,
    pub release: String,
    pub source_dir: String,
    pub builder: String,
}

#[derive(Serialize)]
struct DocsTable<'a> {
    docs: &'a DocBuildOptions,
}

impl DocBuildOptions {
    pub fn new(project: &str, info: &VersionInfo, docs: &DocsConfig) -> Self {
        DocBuildOptions {
            project: project.to_string(),
            version: info.version.clone(),
            release: info.release.clone(),
            source_dir: docs.source_dir.clone(),
            builder: docs.builder.clone(),
        }
    }

    /// Renders the options as a `[docs]` TOML table.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(&DocsTable { docs: self })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> VersionInfo {
        VersionInfo {
            version: "1.4.0".to_string(),
            release: "1.4.0.dev1700000000".to_string(),
            git_describe: "1.4.0-7-gdeadbee".to_string(),
        }
    }

    #[test]
    fn test_options_copy_version_literally() {
        let opts = DocBuildOptions::new("quilttools", &info(), &DocsConfig::default());
        assert_eq!(opts.project, "quilttools");
        assert_eq!(opts.version, "1.4.0");
        assert_eq!(opts.release, "1.4.0.dev1700000000");
        assert_eq!(opts.source_dir, "Documentation");
        assert_eq!(opts.builder, "man");
    }

    #[test]
    fn test_to_toml() {
        let opts = DocBuildOptions::new("quilttools", &info(), &DocsConfig::default());
        let rendered = opts.to_toml().unwrap();
        assert!(rendered.starts_with("[docs]"));
        assert!(rendered.contains("project = \"quilttools\""));
        assert!(rendered.contains("release = \"1.4.0.dev1700000000\""));
        assert!(rendered.contains("builder = \"man\""));

        let value: toml::Value = toml::from_str(&rendered).unwrap();
        assert_eq!(value["docs"]["version"].as_str(), Some("1.4.0"));
    }
}
