//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state (search query, chat draft) and delegates
//! rendering to `components`.

pub mod chat;
pub mod dashboard;
pub mod events;
