//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` carries the identity the chat composer is gated on; `portal` is the
//! data snapshot the embedding app fills from its providers.

pub mod auth;
pub mod portal;
