//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `calculator.rs` — closed-form CN/UK outcome calculators + comparison.
//! - `insights.rs` — narrative insight rules over a computed outcome pair.
//! - `knowledge.rs` — bundled statute/case knowledge base + tag search.
//! - `scenario.rs` — scenario file loading, flag resolution, validation.
//! - `storage.rs` — audit log.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod calculator;
pub mod insights;
pub mod knowledge;
pub mod output;
pub mod scenario;
pub mod storage;
