//! Core domain types
//!
//! These types mirror the records held by the remote events service. They are
//! never cached locally; every read re-fetches them.

pub mod event;
