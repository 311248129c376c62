//! Networking for the activity API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the three HTTP calls of the activity contract. Paths,
//! bodies, and response classification come from the `contract` crate.

pub mod api;
