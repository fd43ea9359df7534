//! Chat thread view: header counters, transcript, and message composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by the chat page, which owns the transcript and the draft. This
//! component never edits either: keystrokes leave through
//! `handle_input_change` and sends leave through `handle_submit`.
//!
//! DESIGN
//! ======
//! The composer is shown only to users with a non-empty username; everyone
//! else sees a disabled login prompt. Own-message styling is a plain string
//! comparison between author and username, not an identity check.

#[cfg(test)]
#[path = "chat_canvas_test.rs"]
mod chat_canvas_test;

use leptos::prelude::*;

use crate::components::counter_icon::{CounterIcon, CounterKind};
use crate::components::loading::LoadingIndicator;
use crate::components::message_bubble::MessageBubble;
use crate::i18n::{Localization, keys};
use crate::model::Message;
use crate::state::auth::UserContext;
use crate::util::assets;

/// UI action that asked for the draft to be sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// The send button was clicked.
    Click,
    /// Enter was pressed in the input.
    EnterKey,
}

/// Submit intent forwarded to the owner of the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatSubmit {
    pub trigger: SubmitTrigger,
    pub user: UserContext,
}

/// What the form area at the bottom of the canvas shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComposerMode {
    /// Text input and send button.
    Enabled,
    /// Disabled placeholder asking the user to log in.
    LoginRequired,
}

impl ComposerMode {
    pub fn for_user(user: &UserContext) -> Self {
        if user.can_compose() { Self::Enabled } else { Self::LoginRequired }
    }
}

/// Any non-empty draft may be sent. Whitespace is not trimmed.
pub fn can_submit(draft: &str) -> bool {
    !draft.is_empty()
}

/// Map a `KeyboardEvent.key` value to a submit trigger.
pub fn submit_trigger_for_key(key: &str) -> Option<SubmitTrigger> {
    (key == "Enter").then_some(SubmitTrigger::EnterKey)
}

/// Submit intent for `trigger`, or `None` when the draft is empty.
pub fn submit_for(trigger: SubmitTrigger, draft: &str, user: &UserContext) -> Option<ChatSubmit> {
    can_submit(draft).then(|| ChatSubmit { trigger, user: user.clone() })
}

/// Exact, case-sensitive author/username comparison.
pub fn is_own_message(author_name: &str, user: &UserContext) -> bool {
    user.username() == Some(author_name)
}

pub fn count_or_zero(count: Option<u32>) -> u32 {
    count.unwrap_or(0)
}

/// Transcript rows paired with their own-message flag, in input order.
pub fn message_rows(messages: Vec<Message>, user: &UserContext) -> Vec<(Message, bool)> {
    messages
        .into_iter()
        .map(|message| {
            let own = is_own_message(&message.author_name, user);
            (message, own)
        })
        .collect()
}

/// Chat canvas for one thread.
#[component]
pub fn ChatCanvas(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] messages: Signal<Vec<Message>>,
    #[prop(into)] message_body: Signal<String>,
    #[prop(into)] views: Signal<Option<u32>>,
    #[prop(into)] replies: Signal<Option<u32>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] user: Signal<UserContext>,
    handle_input_change: Callback<String>,
    handle_submit: Callback<ChatSubmit>,
    #[prop(optional)] strings: Localization,
) -> impl IntoView {
    let replies_label = strings.get(keys::CHAT_INFO_REPLIES);
    let views_label = strings.get(keys::CHAT_INFO_VIEWS);
    let placeholder = strings.get(keys::CHAT_INPUT_PLACEHOLDER);
    let login_message = strings.get(keys::CHAT_LOGIN_MESSAGE);

    let submit = move |trigger: SubmitTrigger| {
        let draft = message_body.get_untracked();
        if let Some(intent) = submit_for(trigger, &draft, &user.get_untracked()) {
            log::debug!("chat submit via {trigger:?} ({} chars)", draft.len());
            handle_submit.run(intent);
        }
    };

    let rows = move || {
        let current = user.get();
        message_rows(messages.get(), &current)
            .into_iter()
            .map(|(message, is_current_user)| {
                view! {
                    <MessageBubble
                        name=message.author_name
                        date=message.date
                        message_body=message.message_body
                        is_current_user=is_current_user
                    />
                }
            })
            .collect_view()
    };

    let form = move || match ComposerMode::for_user(&user.get()) {
        ComposerMode::Enabled => view! {
            <div class="chat-canvas__composer">
                <input
                    class="chat-canvas__input"
                    type="text"
                    placeholder=placeholder.clone()
                    prop:value=move || message_body.get()
                    on:input=move |ev| handle_input_change.run(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if let Some(trigger) = submit_trigger_for_key(&ev.key()) {
                            submit(trigger);
                        }
                    }
                />
                <button
                    class="chat-canvas__send"
                    type="submit"
                    on:click=move |_| submit(SubmitTrigger::Click)
                    disabled=move || !can_submit(&message_body.get())
                >
                    <img class="chat-canvas__send-icon" src=assets::SEND_ICON alt="Send"/>
                </button>
            </div>
        }
        .into_any(),
        ComposerMode::LoginRequired => view! {
            <div class="chat-canvas__input chat-canvas__input--disabled">{login_message.clone()}</div>
        }
        .into_any(),
    };

    view! {
        <div class="chat-canvas">
            <div class="chat-canvas__container">
                <div class="chat-canvas__header">
                    <div class="chat-canvas__side"></div>
                    <h1 class="chat-canvas__title">{move || title.get()}</h1>
                    <div class="chat-canvas__side">
                        <table>
                            <tbody>
                                <CounterIcon
                                    kind=CounterKind::Replies
                                    count=Signal::derive(move || count_or_zero(replies.get()))
                                    text=replies_label
                                />
                                <CounterIcon
                                    kind=CounterKind::Views
                                    count=Signal::derive(move || count_or_zero(views.get()))
                                    text=views_label
                                />
                            </tbody>
                        </table>
                    </div>
                </div>
                <div class="chat-canvas__body">
                    {rows}
                    <Show when=move || loading.get()>
                        <div class="chat-canvas__loading">
                            <LoadingIndicator/>
                        </div>
                    </Show>
                </div>
                <div class="chat-canvas__form">{form}</div>
            </div>
        </div>
    }
}
