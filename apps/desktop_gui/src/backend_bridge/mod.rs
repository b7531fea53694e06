//! UI-to-worker command queue and the worker runtime behind it.

pub mod commands;
pub mod runtime;
