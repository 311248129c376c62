//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser-free orchestration out of page and component
//! code so it can be driven from plain unit tests.

pub mod board_actions;
