//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive already-fetched data as props and render it. User
//! intents (typing, submitting, searching) leave through caller-supplied
//! callbacks; no component mutates the data it is given.

pub mod chat_canvas;
pub mod counter_icon;
pub mod dashboard_tile_button;
pub mod data_card;
pub mod events_canvas;
pub mod loading;
pub mod message_bubble;
pub mod news_preview;
pub mod search_page;
pub mod upcoming_events_preview;
