use super::*;

#[test]
fn message_reads_provider_camel_case_fields() {
    let raw = r#"{
        "id": "m-1",
        "authorName": "Alice",
        "date": "2024-03-07T15:05:00Z",
        "messageBody": "hello"
    }"#;
    let message: Message = serde_json::from_str(raw).unwrap();
    assert_eq!(message.author_name, "Alice");
    assert_eq!(message.message_body, "hello");
}

#[test]
fn event_reads_underscore_id() {
    let raw = r#"{
        "_id": "e-42",
        "title": "Spring Picnic",
        "date": "2024-05-01T12:00:00Z",
        "location": "Park",
        "desc": "Bring food"
    }"#;
    let event: EventData = serde_json::from_str(raw).unwrap();
    assert_eq!(event.id, "e-42");
    assert_eq!(serde_json::to_value(&event).unwrap()["_id"], "e-42");
}

#[test]
fn message_missing_body_is_rejected() {
    let raw = r#"{ "id": "m-1", "authorName": "Alice", "date": "" }"#;
    assert!(serde_json::from_str::<Message>(raw).is_err());
}
