//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`board` for the activity listing and its
//! registration forms, `message` for the transient status banner) so each
//! component depends on a small focused model. Both are provided as
//! `RwSignal` contexts by the root `App`.

pub mod board;
pub mod message;
