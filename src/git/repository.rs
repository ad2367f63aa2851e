use git2::{
    DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo,
};
use std::io;
use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::error::{BuildVerError, Result};
use crate::git::{DescribeRequest, SourceControl};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

/// Outcome of looking for a describable working tree.
pub enum Probe {
    Usable(Git2Repository),
    Unusable(BoundaryWarning),
}

impl Git2Repository {
    /// Opens `path` as a working tree, or reports why it cannot be described.
    ///
    /// With `discover` set, parent directories are searched as well.
    /// A missing path is an error; a path without git metadata, a bare
    /// repository and a repository without commits are boundary warnings.
    pub fn probe<P: AsRef<Path>>(path: P, discover: bool) -> Result<Probe> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(BuildVerError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{}' does not exist", path.display()),
            )));
        }

        let opened = if discover {
            Git2Repo::discover(path)
        } else {
            Git2Repo::open(path)
        };

        let repo = match opened {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                tracing::debug!(path = %path.display(), error = %e, "no repository found");
                return Ok(Probe::Unusable(BoundaryWarning::NotARepository {
                    path: path.to_path_buf(),
                }));
            }
            Err(e) => return Err(e.into()),
        };

        if repo.is_bare() {
            return Ok(Probe::Unusable(BoundaryWarning::BareRepository {
                path: path.to_path_buf(),
            }));
        }

        match repo.head() {
            Ok(_) => {}
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(Probe::Unusable(BoundaryWarning::UnbornHead {
                    path: path.to_path_buf(),
                }));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(Probe::Usable(Git2Repository { repo }))
    }

    fn describe_head(&self, opts: &DescribeOptions, request: &DescribeRequest) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        let described = head.as_object().describe(opts).map_err(no_tag_error)?;
        let mut text = described.format(None)?;
        text.push_str(&request.broken_suffix);
        Ok(text)
    }
}

// libgit2 reports "no tag can describe HEAD" as a generic error of the
// describe class, not as NotFound.
fn is_no_tag(e: &git2::Error) -> bool {
    e.class() == ErrorClass::Describe || e.code() == ErrorCode::NotFound
}

fn no_tag_error(e: git2::Error) -> BuildVerError {
    if is_no_tag(&e) {
        BuildVerError::describe(e.message())
    } else {
        e.into()
    }
}

impl SourceControl for Git2Repository {
    fn describe(&self, request: &DescribeRequest) -> Result<String> {
        let mut opts = DescribeOptions::new();
        if request.tags {
            opts.describe_tags();
        }

        let mut format = DescribeFormatOptions::new();
        if request.dirty {
            format.dirty_suffix(&request.dirty_suffix);
        }

        match self.repo.describe(&opts) {
            Ok(described) => Ok(described.format(Some(&format))?),
            Err(e) if is_no_tag(&e) => Err(no_tag_error(e)),
            Err(e) if request.broken => {
                tracing::warn!(error = %e, "working tree could not be inspected, describing HEAD");
                self.describe_head(&opts, request)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_plain_directory() {
        let dir = TempDir::new().unwrap();
        match Git2Repository::probe(dir.path(), false).unwrap() {
            Probe::Unusable(BoundaryWarning::NotARepository { path }) => {
                assert_eq!(path, dir.path());
            }
            _ => panic!("plain directory should not be usable"),
        }
    }

    #[test]
    fn test_probe_missing_path_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(
            Git2Repository::probe(&missing, false),
            Err(BuildVerError::Io(_))
        ));
    }

    #[test]
    fn test_probe_bare_repository() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init_bare(dir.path()).unwrap();
        assert!(matches!(
            Git2Repository::probe(dir.path(), false).unwrap(),
            Probe::Unusable(BoundaryWarning::BareRepository { .. })
        ));
    }

    #[test]
    fn test_probe_unborn_head() {
        let dir = TempDir::new().unwrap();
        Git2Repo::init(dir.path()).unwrap();
        assert!(matches!(
            Git2Repository::probe(dir.path(), false).unwrap(),
            Probe::Unusable(BoundaryWarning::UnbornHead { .. })
        ));
    }
}
