//! Folio Bridge library target.
//!
//! Exposes the preview's logic for integration tests. The binary entry point
//! is in `main.rs`; the event loop lives there and everything it calls lives
//! here.

pub mod commands;
pub mod helpers;
pub mod render;
