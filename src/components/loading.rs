//! Three-dot "bubbles" loading indicator.

use leptos::prelude::*;

/// Animated placeholder shown while a provider request is in flight.
///
/// `size` fixes the indicator box in pixels; otherwise it follows the
/// stylesheet.
#[component]
pub fn LoadingIndicator(#[prop(optional)] size: Option<u32>) -> impl IntoView {
    let style = size.map(|px| format!("width:{px}px;height:{px}px;")).unwrap_or_default();

    view! {
        <div class="loading-bubbles" style=style role="status" aria-label="Loading">
            <span class="loading-bubbles__dot"></span>
            <span class="loading-bubbles__dot"></span>
            <span class="loading-bubbles__dot"></span>
        </div>
    }
}
