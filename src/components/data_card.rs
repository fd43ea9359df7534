//! Generic image + text card used by listing pages.
//!
//! DESIGN
//! ======
//! Listing pages map their records into `DataCardData` so every listing shares
//! one card layout.

use leptos::prelude::*;

/// Text content of a [`DataCard`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataCardData {
    pub url: String,
    pub title: String,
    pub subtitle: String,
    pub secondary_subtitle: String,
    pub description: String,
}

#[component]
pub fn DataCard(#[prop(into)] src: String, data: DataCardData) -> impl IntoView {
    let DataCardData { url, title, subtitle, secondary_subtitle, description } = data;

    view! {
        <article class="data-card">
            <img class="data-card__image" src=src alt=""/>
            <div class="data-card__text">
                <a class="data-card__title" href=url>
                    {title}
                </a>
                <span class="data-card__subtitle">{subtitle}</span>
                <span class="data-card__subtitle data-card__subtitle--secondary">{secondary_subtitle}</span>
                <p class="data-card__description">{description}</p>
            </div>
        </article>
    }
}
