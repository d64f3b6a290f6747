//! Wastedris (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, integration
//! tests and benches can write `wastedris::{core,engine,input,term,types}`.

pub mod config;

pub use wastedris_core as core;
pub use wastedris_engine as engine;
pub use wastedris_input as input;
pub use wastedris_term as term;
pub use wastedris_types as types;

pub use config::AppConfig;
