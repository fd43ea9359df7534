use super::*;

// =============================================================
// Event image rules
// =============================================================

#[test]
fn event_image_picnic_title() {
    assert_eq!(event_image_rules().resolve("Summer Picnic"), assets::EVENT_PICNIC);
}

#[test]
fn event_image_roundtable_title() {
    assert_eq!(event_image_rules().resolve("Leadership Roundtable"), assets::EVENT_ROUNDTABLE);
}

#[test]
fn event_image_first_rule_wins() {
    assert_eq!(event_image_rules().resolve("Annual Picnic Roundtable"), assets::EVENT_PICNIC);
    assert_eq!(event_image_rules().resolve("Roundtable after the Picnic"), assets::EVENT_PICNIC);
}

#[test]
fn event_image_match_is_case_sensitive() {
    assert_eq!(event_image_rules().resolve("company picnic"), assets::EVENT_FORUM);
    assert_eq!(event_image_rules().resolve("ROUNDTABLE"), assets::EVENT_FORUM);
}

#[test]
fn event_image_defaults_to_forum() {
    assert_eq!(event_image_rules().resolve("Open Forum"), assets::EVENT_FORUM);
    assert_eq!(event_image_rules().resolve(""), assets::EVENT_FORUM);
}

// =============================================================
// RuleTable
// =============================================================

#[test]
fn empty_table_resolves_to_fallback() {
    let table = RuleTable::new(7);
    assert_eq!(*table.resolve("anything"), 7);
    assert!(table.rules().is_empty());
}

#[test]
fn appended_rule_extends_policy_without_reordering() {
    let table = event_image_rules().with_rule(Predicate::Contains("Hackathon".to_owned()), "/images/hack.png".to_owned());
    assert_eq!(table.rules().len(), 3);
    assert_eq!(table.resolve("Winter Hackathon"), "/images/hack.png");
    assert_eq!(table.resolve("Hackathon Picnic"), assets::EVENT_PICNIC);
    assert_eq!(table.fallback(), assets::EVENT_FORUM);
}
