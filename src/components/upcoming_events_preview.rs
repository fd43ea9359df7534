//! Dashboard tile showing the next upcoming event(s).
//!
//! SYSTEM CONTEXT
//! ==============
//! While the events provider is loading the tile shows only its header and a
//! spinner. Once loaded it shows the first `limit` events and a link to the
//! full events listing.

#[cfg(test)]
#[path = "upcoming_events_preview_test.rs"]
mod upcoming_events_preview_test;

use leptos::prelude::*;

use crate::components::dashboard_tile_button::DashboardTileButton;
use crate::components::loading::LoadingIndicator;
use crate::config::{DEFAULT_EVENTS_ROUTE, DEFAULT_UPCOMING_EVENTS_LIMIT};
use crate::i18n::{Localization, keys};
use crate::model::UpcomingEventData;
use crate::util::assets;
use crate::util::date::shorten_time_and_date;
use crate::util::preview::preview_slice;

const LOADING_INDICATOR_PX: u32 = 60;

/// Display-ready text of one upcoming-event card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpcomingEventCard {
    pub title: String,
    pub date: String,
    pub desc: String,
}

/// The two mutually exclusive render paths of the tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpcomingEventsView {
    /// Header and spinner only.
    Loading,
    /// Header, cards and the "view all" link.
    Loaded(Vec<UpcomingEventCard>),
}

pub fn upcoming_events_view(events: &[UpcomingEventData], is_loading: bool, limit: usize) -> UpcomingEventsView {
    if is_loading {
        return UpcomingEventsView::Loading;
    }
    let cards = preview_slice(events, limit)
        .iter()
        .map(|event| UpcomingEventCard {
            title: event.title.clone(),
            date: shorten_time_and_date(&event.date),
            desc: event.desc.clone(),
        })
        .collect();
    UpcomingEventsView::Loaded(cards)
}

#[component]
pub fn UpcomingEventsPreview(
    #[prop(into)] events_data: Signal<Vec<UpcomingEventData>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(default = DEFAULT_UPCOMING_EVENTS_LIMIT)] limit: usize,
    #[prop(into, default = DEFAULT_EVENTS_ROUTE.to_owned())] events_route: String,
    #[prop(optional)] strings: Localization,
) -> impl IntoView {
    let header = strings.get(keys::UPCOMING_EVENTS_HEADER);
    let view_all = strings.get(keys::UPCOMING_EVENTS_VIEW_ALL);

    move || match upcoming_events_view(&events_data.get(), is_loading.get(), limit) {
        UpcomingEventsView::Loading => view! {
            <div class="upcoming-events">
                <div class="upcoming-events__main">
                    <div class="dashboard__header">{header.clone()}</div>
                    <div class="upcoming-events__loading">
                        <LoadingIndicator size=LOADING_INDICATOR_PX/>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        UpcomingEventsView::Loaded(cards) => view! {
            <div class="upcoming-events">
                <div class="upcoming-events__main">
                    <div class="dashboard__header">{header.clone()}</div>
                    {cards
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="upcoming-events__card">
                                    <img class="upcoming-events__image" src=assets::CALENDAR_ICON alt=""/>
                                    <div class="upcoming-events__text">
                                        <label class="upcoming-events__title">{card.title}</label>
                                        <label class="upcoming-events__date">{card.date}</label>
                                        <label>{card.desc}</label>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="upcoming-events__footer">
                    <DashboardTileButton link=events_route.clone() label=view_all.clone()/>
                </div>
            </div>
        }
        .into_any(),
    }
}
