//! Chat page: owns the draft and appends sent messages to the transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChatCanvas` only reports intents. This page turns a submit intent into a
//! `Message` authored by the submitting user and appends it to the shared
//! `PortalData` snapshot; delivering it anywhere is the embedding app's job.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::components::chat_canvas::{ChatCanvas, ChatSubmit};
use crate::i18n::Localization;
use crate::model::Message;
use crate::state::auth::UserContext;
use crate::state::portal::PortalData;

/// Message for a locally sent draft, or `None` if the user may not post.
pub fn compose_message(user: &UserContext, body: String, id: String, sent_at: OffsetDateTime) -> Option<Message> {
    if !user.can_compose() || body.is_empty() {
        return None;
    }
    let author_name = user.username()?.to_owned();
    let date = match sent_at.format(&Rfc3339) {
        Ok(date) => date,
        Err(err) => {
            log::warn!("could not format send time: {err}");
            String::new()
        }
    };
    Some(Message { id, author_name, date, message_body: body })
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let data = expect_context::<RwSignal<PortalData>>();
    let user = expect_context::<RwSignal<UserContext>>();
    let strings = use_context::<Localization>().unwrap_or_default();

    let draft = RwSignal::new(String::new());

    let on_input = Callback::new(move |value: String| draft.set(value));
    let on_submit = Callback::new(move |submit: ChatSubmit| {
        let body = draft.get_untracked();
        let id = uuid::Uuid::new_v4().to_string();
        let Some(message) = compose_message(&submit.user, body, id, OffsetDateTime::now_utc()) else {
            return;
        };
        log::debug!("appending local message {} via {:?}", message.id, submit.trigger);
        data.update(|d| d.messages.push(message));
        draft.set(String::new());
    });

    view! {
        <ChatCanvas
            title=Signal::derive(move || data.with(|d| d.chat_title.clone()))
            messages=Signal::derive(move || data.with(|d| d.messages.clone()))
            message_body=draft
            views=Signal::derive(move || data.with(|d| d.views))
            replies=Signal::derive(move || data.with(|d| d.replies))
            loading=Signal::derive(move || data.with(|d| d.messages_loading))
            user=user
            handle_input_change=on_input
            handle_submit=on_submit
            strings=strings
        />
    }
}
