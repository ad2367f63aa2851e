use std::fmt;
use std::path::PathBuf;

/// Warnings that occur when inspecting a working directory at the edges of
/// what git can describe. These are non-fatal issues that should be reported
/// to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Directory carries no git metadata (e.g. an unpacked source tarball)
    NotARepository { path: PathBuf },
    /// Repository has no working tree to describe
    BareRepository { path: PathBuf },
    /// Repository exists but HEAD points to no commit yet
    UnbornHead { path: PathBuf },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NotARepository { path } => {
                write!(f, "'{}' is not a git working tree", path.display())
            }
            BoundaryWarning::BareRepository { path } => {
                write!(f, "'{}' is a bare repository", path.display())
            }
            BoundaryWarning::UnbornHead { path } => {
                write!(f, "'{}' has no commits yet", path.display())
            }
        }
    }
}
