//! Data snapshot rendered by the portal pages.
//!
//! The embedding app fills this from its chat, news and events providers and
//! flips the loading flags while requests are in flight. Pages only read it,
//! except the chat page which appends locally sent messages.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use serde::{Deserialize, Serialize};

use crate::model::{EventData, Message, NewsData, UpcomingEventData};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortalData {
    pub chat_title: String,
    pub messages: Vec<Message>,
    pub views: Option<u32>,
    pub replies: Option<u32>,
    pub messages_loading: bool,
    pub events: Vec<EventData>,
    pub events_loading: bool,
    pub news: Vec<NewsData>,
    pub upcoming_events: Vec<UpcomingEventData>,
    pub upcoming_events_loading: bool,
}
