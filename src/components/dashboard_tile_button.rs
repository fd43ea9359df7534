//! Link styled as a dashboard tile action.

use leptos::prelude::*;

/// Navigation affordance at the foot of a dashboard tile.
///
/// Rendered as a plain anchor; the router intercepts same-origin clicks.
#[component]
pub fn DashboardTileButton(
    #[prop(into)] link: String,
    #[prop(into)] label: String,
    #[prop(optional)] is_blue_background: bool,
) -> impl IntoView {
    view! {
        <a
            class="dashboard-tile-button"
            class:dashboard-tile-button--blue=is_blue_background
            href=link
        >
            {label}
        </a>
    }
}
