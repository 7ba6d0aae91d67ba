//! Data Transfer Objects sent to the events service
//!
//! Unlike the domain types these are serialized as form bodies, so the field
//! order of each struct is the order the fields go on the wire.

pub mod event;
