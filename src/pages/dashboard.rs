//! Dashboard page with the news and upcoming-events tiles.

use leptos::prelude::*;

use crate::components::news_preview::NewsPreview;
use crate::components::upcoming_events_preview::UpcomingEventsPreview;
use crate::config::PortalConfig;
use crate::i18n::Localization;
use crate::state::portal::PortalData;

/// Landing route. Preview sizes and the "view all" target come from
/// [`PortalConfig`].
#[component]
pub fn DashboardPage() -> impl IntoView {
    let data = expect_context::<RwSignal<PortalData>>();
    let config = use_context::<PortalConfig>().unwrap_or_default();
    let strings = use_context::<Localization>().unwrap_or_default();

    let news = Signal::derive(move || data.with(|d| d.news.clone()));
    let upcoming = Signal::derive(move || data.with(|d| d.upcoming_events.clone()));
    let upcoming_loading = Signal::derive(move || data.with(|d| d.upcoming_events_loading));

    view! {
        <div class="dashboard">
            <section class="dashboard__tile">
                <NewsPreview news_data=news limit=config.news_preview_limit strings=strings.clone()/>
            </section>
            <section class="dashboard__tile">
                <UpcomingEventsPreview
                    events_data=upcoming
                    is_loading=upcoming_loading
                    limit=config.upcoming_events_limit
                    events_route=config.events_route.clone()
                    strings=strings
                />
            </section>
        </div>
    }
}
