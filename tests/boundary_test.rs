use version_info::boundary::BoundaryWarning;
use version_info::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_unparsable_tag_display() {
    let warning = BoundaryWarning::UnparsableTag {
        tag: "release-123".to_string(),
        reason: "Invalid format".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("Cannot parse tag"),
        "Message should contain 'Cannot parse tag', got: {}",
        display_msg
    );
    assert!(display_msg.contains("release-123"));
    assert!(display_msg.contains("Invalid format"));
}

#[test]
fn test_boundary_warning_tag_outside_branch_display() {
    let warning = BoundaryWarning::TagOutsideBranch {
        tag: "v1.3.0".to_string(),
        range: "1.2.x".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("v1.3.0") && display_msg.contains("1.2.x"),
        "Message should name the tag and the range, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_no_branch_release_display() {
    let warning = BoundaryWarning::NoBranchRelease {
        range: "1.4.x".to_string(),
        seed: "1.4.0-beta.1".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("No release satisfies"));
    assert!(display_msg.contains("1.4.0-beta.1"));
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    // Visual verification test - output is printed to stderr
    ui::display_boundary_warning(&BoundaryWarning::TagOutsideBranch {
        tag: "v2.0.0".to_string(),
        range: "1.x".to_string(),
    });
}
