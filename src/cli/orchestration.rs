//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing separate from the resolve-and-render
//! workflow so the latter can be driven programmatically without clap.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{RepositoryState, VersionInfo};
use crate::resolver::{Clock, SystemClock, VersionResolver};
use crate::ui::{self, OutputFormat};

/// Arguments for the resolve workflow
///
/// Mirrors the CLI Args; `None`/`false` leaves the config value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    /// Working directory to inspect
    pub path: PathBuf,

    /// Overrides `package.fallback_version`
    pub fallback_version: Option<String>,

    /// Overrides `package.name`
    pub name: Option<String>,

    /// Forces parent-directory discovery on
    pub discover: bool,

    pub format: OutputFormat,
}

impl Default for WorkflowArgs {
    fn default() -> Self {
        WorkflowArgs {
            path: PathBuf::from("."),
            fallback_version: None,
            name: None,
            discover: false,
            format: OutputFormat::Text,
        }
    }
}

/// Result of a successful resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Package name the output was rendered for
    pub name: String,

    pub info: VersionInfo,

    /// Why the fallback version was used, if it was
    pub warning: Option<BoundaryWarning>,

    /// Rendered output for stdout
    pub output: String,
}

/// Main resolve workflow
///
/// 1. Apply argument overrides to the configuration
/// 2. Inspect the working directory
/// 3. Derive the version triple
/// 4. Render it in the requested format
pub fn run(args: WorkflowArgs, config: Config) -> Result<WorkflowResult> {
    run_with_clock(args, config, SystemClock)
}

/// [`run`] with an explicit clock.
pub fn run_with_clock<C: Clock>(
    args: WorkflowArgs,
    mut config: Config,
    clock: C,
) -> Result<WorkflowResult> {
    if let Some(fallback) = args.fallback_version {
        config.package.fallback_version = fallback;
    }
    if let Some(name) = args.name {
        config.package.name = name;
    }
    if args.discover {
        config.describe.discover = true;
    }

    let resolver = VersionResolver::from_config(&config).with_clock(clock);

    let state = resolver
        .inspect(&args.path)
        .with_context(|| format!("Cannot inspect '{}'", args.path.display()))?;
    let info = resolver.resolve_state(&state, &config.package.fallback_version);

    let warning = match state {
        RepositoryState::Absent { reason } => Some(reason),
        RepositoryState::Present { .. } => None,
    };

    tracing::info!(
        version = %info.version,
        release = %info.release,
        git = %info.git_describe,
        "resolved package version"
    );

    let output = ui::render(args.format, &config.package.name, &info, &config.docs)?;

    Ok(WorkflowResult {
        name: config.package.name,
        info,
        warning,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::FixedClock;
    use tempfile::TempDir;

    #[test]
    fn test_plain_directory_uses_overrides() {
        let dir = TempDir::new().unwrap();
        let args = WorkflowArgs {
            path: dir.path().to_path_buf(),
            fallback_version: Some("0.7".to_string()),
            name: Some("quilttools".to_string()),
            ..WorkflowArgs::default()
        };

        let result = run_with_clock(args, Config::default(), FixedClock(1)).unwrap();
        assert_eq!(result.name, "quilttools");
        assert_eq!(result.info, VersionInfo::fallback("0.7"));
        assert!(matches!(
            result.warning,
            Some(BoundaryWarning::NotARepository { .. })
        ));
        assert!(result.output.contains("name   : quilttools"));
        assert!(result.output.contains("release: 0.7"));
    }

    #[test]
    fn test_config_fallback_used_without_override() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.package.fallback_version = "1.2".to_string();

        let args = WorkflowArgs {
            path: dir.path().to_path_buf(),
            format: OutputFormat::Env,
            ..WorkflowArgs::default()
        };

        let result = run(args, config).unwrap();
        assert_eq!(result.info.release, "1.2");
        assert!(result.output.contains("BUILDVER_VERSION=1.2"));
    }

    #[test]
    fn test_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let args = WorkflowArgs {
            path: dir.path().join("nope"),
            ..WorkflowArgs::default()
        };

        let err = run(args, Config::default()).unwrap_err();
        assert!(err.to_string().contains("Cannot inspect"));
    }
}
