//! Utility helpers shared across portal UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure functions kept out of component bodies so the render contracts can be
//! tested without a reactive runtime.

pub mod assets;
pub mod date;
pub mod preview;
pub mod rules;
pub mod search;
