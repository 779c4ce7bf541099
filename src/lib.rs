//! Collection-launch core — compiles reusable artifact definitions into
//! executable programs and schedules them for delivery to fleet clients.
//!
//! This crate is a library core invoked by an outer service boundary. All
//! collaborators (artifact repository, tool inventory, durable store,
//! obfuscation transform) are consumed through the port traits in
//! [`application::ports`]; the crate performs no I/O of its own.

pub mod application;
pub mod domain;
