use time::macros::datetime;

use super::*;

#[test]
fn compose_message_authors_as_submitting_user() {
    let user = UserContext::signed_in("alice");
    let message = compose_message(&user, "hi there".to_owned(), "m-1".to_owned(), datetime!(2024-03-07 15:05 UTC)).unwrap();
    assert_eq!(message.id, "m-1");
    assert_eq!(message.author_name, "alice");
    assert_eq!(message.message_body, "hi there");
    assert_eq!(message.date, "2024-03-07T15:05:00Z");
}

#[test]
fn compose_message_keeps_whitespace_body() {
    let user = UserContext::signed_in("alice");
    let message = compose_message(&user, "  ".to_owned(), "m-2".to_owned(), datetime!(2024-03-07 15:05 UTC)).unwrap();
    assert_eq!(message.message_body, "  ");
}

#[test]
fn compose_message_rejects_signed_out_user() {
    let at = datetime!(2024-03-07 15:05 UTC);
    assert!(compose_message(&UserContext::default(), "hi".to_owned(), "m".to_owned(), at).is_none());
    assert!(compose_message(&UserContext::signed_in(""), "hi".to_owned(), "m".to_owned(), at).is_none());
}

#[test]
fn compose_message_rejects_empty_body() {
    let at = datetime!(2024-03-07 15:05 UTC);
    assert!(compose_message(&UserContext::signed_in("alice"), String::new(), "m".to_owned(), at).is_none());
}
