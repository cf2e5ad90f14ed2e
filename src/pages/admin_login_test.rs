use super::*;

#[test]
fn toggle_labels_follow_visibility() {
    assert_eq!(toggle_label(false), "Show");
    assert_eq!(toggle_label(true), "Hide");
    assert_eq!(toggle_aria_label(false), "Show password");
    assert_eq!(toggle_aria_label(true), "Hide password");
}

#[test]
fn submit_label_shows_progress_while_loading() {
    assert_eq!(submit_label(false), "Sign In");
    assert_eq!(submit_label(true), "Signing in...");
}
