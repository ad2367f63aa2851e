//! User interface module - output selection and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Choosing what to render for a requested output format

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_status, format_cargo_env, format_env,
    format_package_info, format_toml,
};

use crate::config::DocsConfig;
use crate::domain::{DocBuildOptions, VersionInfo};
use crate::error::Result;

/// How the resolved version is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable package information block
    #[default]
    Text,
    /// KEY=value lines
    Env,
    /// cargo:rustc-env directives for build scripts
    Cargo,
    /// A [package] TOML table
    Toml,
    /// Documentation generator options as TOML
    Docs,
}

/// Renders the resolution result in the requested format.
///
/// # Arguments
/// * `format` - Selected output format
/// * `name` - Package (and documentation project) name
/// * `info` - The resolved version triple
/// * `docs` - Documentation settings, used by [`OutputFormat::Docs`]
pub fn render(
    format: OutputFormat,
    name: &str,
    info: &VersionInfo,
    docs: &DocsConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_package_info(name, info)),
        OutputFormat::Env => Ok(format_env(info)),
        OutputFormat::Cargo => Ok(format_cargo_env(info)),
        OutputFormat::Toml => format_toml(name, info),
        OutputFormat::Docs => DocBuildOptions::new(name, info, docs).to_toml(),
    }
}
