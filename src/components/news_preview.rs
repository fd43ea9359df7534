//! Dashboard tile showing the latest news.
//!
//! The tile shows the first `limit` items of whatever list it receives and
//! assumes the provider already sorted it newest-first.

#[cfg(test)]
#[path = "news_preview_test.rs"]
mod news_preview_test;

use leptos::prelude::*;

use crate::config::DEFAULT_NEWS_PREVIEW_LIMIT;
use crate::i18n::{Localization, keys};
use crate::model::NewsData;
use crate::util::assets;
use crate::util::date::shorten_time_and_date;
use crate::util::preview::preview_slice;

/// Display-ready text of one news card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewsCard {
    pub title: String,
    pub date: String,
    pub desc: String,
}

pub fn news_cards(news: &[NewsData], limit: usize) -> Vec<NewsCard> {
    preview_slice(news, limit)
        .iter()
        .map(|item| NewsCard {
            title: item.title.clone(),
            date: shorten_time_and_date(&item.date),
            desc: item.desc.clone(),
        })
        .collect()
}

#[component]
pub fn NewsPreview(
    #[prop(into)] news_data: Signal<Vec<NewsData>>,
    #[prop(default = DEFAULT_NEWS_PREVIEW_LIMIT)] limit: usize,
    #[prop(optional)] strings: Localization,
) -> impl IntoView {
    let cards = move || {
        news_cards(&news_data.get(), limit)
            .into_iter()
            .map(|card| {
                view! {
                    <div class="news-preview__card">
                        <img class="news-preview__image" src=assets::NEWS_PREVIEW_IMAGE alt=""/>
                        <div class="news-preview__text">
                            <label class="news-preview__title">{card.title}</label>
                            <label class="news-preview__date">{card.date}</label>
                            <label>{card.desc}</label>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="news-preview">
            <div class="dashboard__header">{strings.get(keys::NEWS_PREVIEW_HEADER)}</div>
            {cards}
        </div>
    }
}
