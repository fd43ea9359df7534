//! Display records handed to the view layer by the data providers.
//!
//! DESIGN
//! ======
//! Field names follow the providers' camelCase JSON so snapshots deserialize
//! without adapters. Dates stay as the raw RFC 3339 string; formatting for
//! display happens in `util::date`.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// A single chat message in a thread transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub author_name: String,
    pub date: String,
    pub message_body: String,
}

/// An entry in the events listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub date: String,
    pub location: String,
    pub desc: String,
}

/// A news item shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsData {
    pub title: String,
    pub date: String,
    pub desc: String,
}

/// An upcoming event shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingEventData {
    pub title: String,
    pub date: String,
    pub desc: String,
}
