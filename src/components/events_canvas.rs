//! Events listing: search shell plus one card per event.
//!
//! SYSTEM CONTEXT
//! ==============
//! The events page filters the provider's list by the query and hands the
//! result here. This component only maps events to cards; it never filters.

#[cfg(test)]
#[path = "events_canvas_test.rs"]
mod events_canvas_test;

use leptos::prelude::*;

use crate::components::data_card::{DataCard, DataCardData};
use crate::components::search_page::SearchPage;
use crate::config::DEFAULT_EVENTS_ROUTE;
use crate::i18n::{Localization, keys};
use crate::model::EventData;
use crate::util::date::shorten_time_and_date;
use crate::util::rules::{RuleTable, event_image_rules};

/// Card-ready view of one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventCard {
    pub src: String,
    pub data: DataCardData,
}

/// Build one card per event, in input order.
pub fn event_cards(events: &[EventData], image_rules: &RuleTable<String>) -> Vec<EventCard> {
    events
        .iter()
        .map(|event| EventCard {
            src: image_rules.resolve(&event.title).clone(),
            data: DataCardData {
                url: format!("{DEFAULT_EVENTS_ROUTE}#{}", event.id),
                title: event.title.clone(),
                subtitle: shorten_time_and_date(&event.date),
                secondary_subtitle: event.location.clone(),
                description: event.desc.clone(),
            },
        })
        .collect()
}

#[component]
pub fn EventsCanvas(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] filtered_event_data: Signal<Vec<EventData>>,
    handle_input_change: Callback<String>,
    #[prop(optional)] image_rules: Option<RuleTable<String>>,
    #[prop(optional)] strings: Localization,
) -> impl IntoView {
    let rules = image_rules.unwrap_or_else(event_image_rules);
    let cards = move || {
        event_cards(&filtered_event_data.get(), &rules)
            .into_iter()
            .map(|card| view! { <DataCard src=card.src data=card.data/> })
            .collect_view()
    };

    view! {
        <SearchPage
            header=strings.get(keys::EVENTS_HEADER)
            placeholder=strings.get(keys::EVENTS_SEARCH_PLACEHOLDER)
            query=query
            loading=loading
            handle_input_change=handle_input_change
        >
            {cards}
        </SearchPage>
    }
}
