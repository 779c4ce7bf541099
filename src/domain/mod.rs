//! Domain layer — pure types, validators and typed errors.
//!
//! Nothing in this module performs I/O or depends on the application layer.

pub mod artifact;
pub mod config;
pub mod error;
pub mod flow_id;
pub mod paths;
pub mod request;
pub mod session;
