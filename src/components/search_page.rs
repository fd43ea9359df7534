//! Listing page shell: heading, search bar, loading state, results.

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;

/// Shell shared by searchable listing pages.
///
/// The query is owned by the caller; keystrokes are forwarded through
/// `handle_input_change` and the results arrive as `children`.
#[component]
pub fn SearchPage(
    #[prop(into)] header: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] query: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    handle_input_change: Callback<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="search-page">
            <h1 class="search-page__header">{header}</h1>
            <input
                class="search-page__input"
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| handle_input_change.run(event_target_value(&ev))
            />
            <Show when=move || loading.get()>
                <div class="search-page__loading">
                    <LoadingIndicator/>
                </div>
            </Show>
            <div class="search-page__results">{children()}</div>
        </div>
    }
}
