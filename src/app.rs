//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::PortalConfig;
use crate::i18n::Localization;
use crate::pages::{chat::ChatPage, dashboard::DashboardPage, events::EventsPage};
use crate::state::{auth::UserContext, portal::PortalData};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the user, data, config and string-table contexts. The embedding
/// app fills `RwSignal<UserContext>` and `RwSignal<PortalData>` from its
/// providers; both start empty.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let user = RwSignal::new(UserContext::default());
    let data = RwSignal::new(PortalData::default());

    provide_context(user);
    provide_context(data);
    provide_context(PortalConfig::load());
    provide_context(Localization::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/intranet-portal.css"/>
        <Title text="Community Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("events") view=EventsPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
