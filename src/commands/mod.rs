//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `knowledge.rs` — kb show/search/list command tree.
//! - `runtime.rs` — compare/calculate/insights/validate.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod knowledge;
pub mod runtime;

pub use knowledge::handle_kb_commands;
pub use runtime::handle_runtime_commands;
