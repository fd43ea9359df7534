//! Client-side event search used by the events page.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::model::EventData;

/// Events whose title, description or location contains `query`.
///
/// Matching is case-insensitive on the trimmed query. A blank query keeps
/// every event. Input order is preserved.
pub fn filter_events(events: &[EventData], query: &str) -> Vec<EventData> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|event| {
            [&event.title, &event.desc, &event.location]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
