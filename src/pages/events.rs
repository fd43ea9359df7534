//! Events page: owns the search query and filters the provider's list.

use leptos::prelude::*;

use crate::components::events_canvas::EventsCanvas;
use crate::i18n::Localization;
use crate::state::portal::PortalData;
use crate::util::search::filter_events;

#[component]
pub fn EventsPage() -> impl IntoView {
    let data = expect_context::<RwSignal<PortalData>>();
    let strings = use_context::<Localization>().unwrap_or_default();

    let query = RwSignal::new(String::new());
    let filtered = Signal::derive(move || {
        let q = query.get();
        data.with(|d| filter_events(&d.events, &q))
    });
    let loading = Signal::derive(move || data.with(|d| d.events_loading));
    let on_input = Callback::new(move |value: String| query.set(value));

    view! {
        <EventsCanvas
            query=query
            loading=loading
            filtered_event_data=filtered
            handle_input_change=on_input
            strings=strings
        />
    }
}
