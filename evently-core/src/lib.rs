//! Evently Core
//!
//! Core types shared by the Evently client and command-line front end.
//!
//! This crate contains:
//! - Domain types: the `Event` record as the back end returns it
//! - DTOs: form payloads sent to the back end when creating or updating events

pub mod domain;
pub mod dto;
