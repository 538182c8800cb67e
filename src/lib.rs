//! Jospel (workspace facade crate).
//!
//! The game lives in dedicated crates under `crates/`; this package re-exports them as
//! `jospel::{core,input,term,types}` and adds what the `jospel` binary needs on top:
//! configuration, log setup, the interactive app state and headless runs.

pub use jospel_core as core;
pub use jospel_input as input;
pub use jospel_term as term;
pub use jospel_types as types;

pub mod app;
pub mod config;
pub mod headless;
pub mod telemetry;
