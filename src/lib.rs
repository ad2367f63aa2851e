pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod resolver;
pub mod ui;

pub use domain::VersionInfo;
pub use error::{BuildVerError, Result};
pub use resolver::VersionResolver;
