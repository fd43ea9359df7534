use super::*;

fn event(id: &str, title: &str, location: &str, desc: &str) -> EventData {
    EventData {
        id: id.to_owned(),
        title: title.to_owned(),
        date: "2024-05-01T12:00:00Z".to_owned(),
        location: location.to_owned(),
        desc: desc.to_owned(),
    }
}

fn sample() -> Vec<EventData> {
    vec![
        event("1", "Spring Picnic", "Lakeside Park", "Food and games"),
        event("2", "Leadership Roundtable", "Room 4", "Quarterly planning"),
        event("3", "Open Forum", "Main Hall", "Ask the team anything"),
    ]
}

#[test]
fn blank_query_keeps_everything_in_order() {
    let ids: Vec<_> = filter_events(&sample(), "   ").into_iter().map(|e| e.id).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn query_matches_title_case_insensitively() {
    let hits = filter_events(&sample(), "picnic");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}

#[test]
fn query_matches_location_and_description() {
    assert_eq!(filter_events(&sample(), "main hall")[0].id, "3");
    assert_eq!(filter_events(&sample(), " PLANNING ")[0].id, "2");
}

#[test]
fn query_without_hits_is_empty() {
    assert!(filter_events(&sample(), "hackathon").is_empty());
    assert!(filter_events(&[], "picnic").is_empty());
}
