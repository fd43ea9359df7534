//! Single chat message bubble.

use leptos::prelude::*;

use crate::util::date::shorten_time_and_date;

/// Author, timestamp and body of one message. `is_current_user` switches to
/// the right-aligned "own message" style.
#[component]
pub fn MessageBubble(name: String, date: String, message_body: String, is_current_user: bool) -> impl IntoView {
    let shown_date = shorten_time_and_date(&date);

    view! {
        <div class="message" class:message--own=is_current_user>
            <div class="message__meta">
                <span class="message__author">{name}</span>
                <span class="message__date">{shown_date}</span>
            </div>
            <div class="message__body">{message_body}</div>
        </div>
    }
}
