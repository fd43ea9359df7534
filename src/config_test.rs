use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_nothing_is_set() {
    let cfg = PortalConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, PortalConfig::default());
    assert_eq!(cfg.news_preview_limit, 1);
    assert_eq!(cfg.upcoming_events_limit, 1);
    assert_eq!(cfg.events_route, "/events");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = PortalConfig::from_lookup(lookup_from(&[
        ("PORTAL_NEWS_PREVIEW_LIMIT", "3"),
        ("PORTAL_UPCOMING_EVENTS_LIMIT", " 0 "),
        ("PORTAL_EVENTS_ROUTE", "/app/events"),
    ]))
    .unwrap();
    assert_eq!(cfg.news_preview_limit, 3);
    assert_eq!(cfg.upcoming_events_limit, 0);
    assert_eq!(cfg.events_route, "/app/events");
}

#[test]
fn from_lookup_rejects_non_numeric_limit() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_NEWS_PREVIEW_LIMIT", "many")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber { var: "PORTAL_NEWS_PREVIEW_LIMIT".into(), value: "many".into() }
    );
}

#[test]
fn from_lookup_rejects_negative_limit() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_UPCOMING_EVENTS_LIMIT", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { .. }));
}

#[test]
fn from_lookup_rejects_relative_route() {
    let err = PortalConfig::from_lookup(lookup_from(&[("PORTAL_EVENTS_ROUTE", "events")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidRoute { .. }));
    assert!(err.to_string().contains("PORTAL_EVENTS_ROUTE"));
}
