use super::*;

#[test]
fn bundled_table_defines_every_key() {
    let table = Localization::en_us().unwrap();
    assert!(table.missing_keys().is_empty(), "missing: {:?}", table.missing_keys());
}

#[test]
fn bundled_table_carries_chat_labels() {
    let table = Localization::default();
    assert_eq!(table.get(keys::CHAT_INFO_REPLIES), "Replies");
    assert_eq!(table.get(keys::CHAT_INFO_VIEWS), "Views");
    assert_eq!(table.get(keys::NEWS_PREVIEW_HEADER), "Latest News");
}

#[test]
fn missing_key_echoes_key() {
    let table = Localization::empty();
    assert_eq!(table.get(keys::CHAT_LOGIN_MESSAGE), "CHAT_LOGIN_MESSAGE");
    assert_eq!(table.missing_keys().len(), keys::ALL.len());
}

#[test]
fn from_json_reads_custom_table() {
    let table = Localization::from_json(r#"{ "CHAT_INFO_VIEWS": "Aufrufe" }"#).unwrap();
    assert_eq!(table.get(keys::CHAT_INFO_VIEWS), "Aufrufe");
    assert_eq!(table.get(keys::CHAT_INFO_REPLIES), "CHAT_INFO_REPLIES");
}

#[test]
fn from_json_rejects_non_string_values() {
    assert!(matches!(
        Localization::from_json(r#"{ "CHAT_INFO_VIEWS": 3 }"#),
        Err(LocalizationError::Parse(_))
    ));
    assert!(Localization::from_json("[]").is_err());
}
