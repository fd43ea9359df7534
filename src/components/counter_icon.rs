//! Icon + count table row used in the chat header.

#[cfg(test)]
#[path = "counter_icon_test.rs"]
mod counter_icon_test;

use leptos::prelude::*;

use crate::util::assets;

/// Which thread statistic a counter row shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterKind {
    Replies,
    Views,
}

impl CounterKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Replies => assets::REPLIES_ICON,
            Self::Views => assets::VIEWS_ICON,
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Replies => "counter-icon--replies",
            Self::Views => "counter-icon--views",
        }
    }
}

/// One `<tr>`: icon, count, label. Must be placed inside a `<tbody>`.
#[component]
pub fn CounterIcon(kind: CounterKind, #[prop(into)] count: Signal<u32>, text: String) -> impl IntoView {
    let class = format!("counter-icon {}", kind.css_modifier());

    view! {
        <tr class=class>
            <td>
                <img class="counter-icon__glyph" src=kind.icon() alt=""/>
            </td>
            <td class="counter-icon__count">{move || count.get().to_string()}</td>
            <td class="counter-icon__label">{text}</td>
        </tr>
    }
}
