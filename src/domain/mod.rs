//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep scenario/outcome/report structs in one place.
//! - Avoid cyclic imports and duplicated type definitions.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — scenario, outcome, insight and knowledge structs.
//! - `constants.rs` — division rates, thresholds and scenario defaults.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! Changes in these structs can affect `--json` outputs and integration contracts.
//! Keep schema-impacting changes explicit and synchronized with `docs/contracts/*`.

pub mod constants;
pub mod models;
