use git_buildver::boundary::BoundaryWarning;
use std::path::PathBuf;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_not_a_repository_display() {
    let warning = BoundaryWarning::NotARepository {
        path: PathBuf::from("/build/quilttools-0.3"),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("not a git working tree"),
        "Message should explain the missing repository, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("/build/quilttools-0.3"),
        "Message should contain the path, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_bare_repository_display() {
    let warning = BoundaryWarning::BareRepository {
        path: PathBuf::from("/srv/git/quilttools.git"),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("bare repository"),
        "Message should contain 'bare repository', got: {}",
        display_msg
    );
    assert!(display_msg.contains("/srv/git/quilttools.git"));
}

#[test]
fn test_boundary_warning_unborn_head_display() {
    let warning = BoundaryWarning::UnbornHead {
        path: PathBuf::from("fresh"),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("no commits yet"),
        "Message should contain 'no commits yet', got: {}",
        display_msg
    );
    assert!(display_msg.contains("fresh"));
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::UnbornHead {
        path: PathBuf::from("x"),
    };
    let b = BoundaryWarning::UnbornHead {
        path: PathBuf::from("x"),
    };
    let c = BoundaryWarning::BareRepository {
        path: PathBuf::from("x"),
    };
    assert_eq!(a, b);
    assert_ne!(a, c);
}
