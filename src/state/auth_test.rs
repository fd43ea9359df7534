use super::*;

// =============================================================
// UserContext defaults
// =============================================================

#[test]
fn user_context_default_no_user() {
    let ctx = UserContext::default();
    assert!(ctx.user.is_none());
    assert_eq!(ctx.username(), None);
    assert!(!ctx.can_compose());
}

// =============================================================
// Composer gate
// =============================================================

#[test]
fn can_compose_with_named_user() {
    assert!(UserContext::signed_in("alice").can_compose());
}

#[test]
fn cannot_compose_with_empty_username() {
    let ctx = UserContext::signed_in("");
    assert_eq!(ctx.username(), Some(""));
    assert!(!ctx.can_compose());
}

#[test]
fn cannot_compose_when_username_missing() {
    let ctx = UserContext { user: Some(User { username: None }) };
    assert!(!ctx.can_compose());
}

#[test]
fn whitespace_username_still_composes() {
    assert!(UserContext::signed_in(" ").can_compose());
}
