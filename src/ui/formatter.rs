//! Pure formatting functions for UI output.
//!
//! Functions returning `String` have no side effects and are what the
//! output formats are built from; `display_*` functions print.

use console::style;
use serde::Serialize;

use crate::boundary::BoundaryWarning;
use crate::domain::VersionInfo;
use crate::error::Result;

/// Prefix of the variables written by the `env` and `cargo` formats.
pub const ENV_PREFIX: &str = "BUILDVER";

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").for_stderr().yellow(), message);
}

/// Print a boundary warning with a yellow prefix.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("WARNING:").for_stderr().yellow(), warning);
}

/// The package-information block shown before a build proceeds.
///
/// ```text
/// Package Information:
/// name   : quilttools
/// version: 1.4.0
/// release: 1.4.0.dev1700000000
/// git    : 1.4.0-7-gdeadbee
/// ```
pub fn format_package_info(name: &str, info: &VersionInfo) -> String {
    format!(
        "Package Information:\nname   : {}\nversion: {}\nrelease: {}\ngit    : {}\n",
        name, info.version, info.release, info.git_describe
    )
}

fn env_pairs(info: &VersionInfo) -> [(String, &str); 3] {
    [
        (format!("{}_VERSION", ENV_PREFIX), info.version.as_str()),
        (format!("{}_RELEASE", ENV_PREFIX), info.release.as_str()),
        (
            format!("{}_GIT_DESCRIBE", ENV_PREFIX),
            info.git_describe.as_str(),
        ),
    ]
}

/// `KEY=value` lines suitable for sourcing from a shell or a Makefile.
pub fn format_env(info: &VersionInfo) -> String {
    env_pairs(info)
        .iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

/// `cargo:rustc-env=` directives for a build script.
pub fn format_cargo_env(info: &VersionInfo) -> String {
    env_pairs(info)
        .iter()
        .map(|(key, value)| format!("cargo:rustc-env={}={}\n", key, value))
        .collect()
}

#[derive(Serialize)]
struct PackageTable<'a> {
    package: PackageEntry<'a>,
}

#[derive(Serialize)]
struct PackageEntry<'a> {
    name: &'a str,
    version: &'a str,
    release: &'a str,
    git_describe: &'a str,
}

/// The version triple as a `[package]` TOML table.
pub fn format_toml(name: &str, info: &VersionInfo) -> Result<String> {
    let table = PackageTable {
        package: PackageEntry {
            name,
            version: &info.version,
            release: &info.release,
            git_describe: &info.git_describe,
        },
    };
    Ok(toml::to_string(&table)?)
}
