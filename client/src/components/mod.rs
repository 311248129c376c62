//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render activity cards and the status banner. They read the
//! board/message signals from Leptos context and report user intent
//! through the callbacks in [`activity_card::CardActions`].

pub mod activity_card;
pub mod message_banner;
pub mod participant_list;
pub mod register_form;
