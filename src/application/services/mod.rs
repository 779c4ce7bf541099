//! Application services — the compile and schedule pipelines.

pub mod compiler;
pub mod launcher;
pub mod scheduler;
pub mod tools;
