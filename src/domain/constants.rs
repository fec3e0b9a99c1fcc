//! Division rates, thresholds and scenario defaults.
//!
//! Rates are fractions of the matrimonial pool unless the name says
//! per-year. Both calculators read from here so the two regimes stay
//! comparable field by field.

// CN statutory regime (Civil Code Book V).
pub const CN_BASE_SHARE_RATE: f64 = 0.50;
pub const CN_LIQUIDITY_DISCOUNT_RATE: f64 = 0.20;
pub const CN_HOMEMAKER_COMP_PER_YEAR: f64 = 5_000.0;
pub const CN_FAULT_ADJUSTMENT_RATE: f64 = 0.05;
pub const CN_CHILDREN_ADJUSTMENT_RATE: f64 = 0.03;
// Observed share of awards actually collected post-judgment.
pub const CN_ENFORCEMENT_RATE: f64 = 0.30;

// UK discretionary regime (MCA 1973 as applied since White v White).
pub const UK_SHARING_RATE: f64 = 0.50;
pub const UK_NEEDS_RATE: f64 = 0.60;
// Pools at or above the ceiling are big-money cases; the needs uplift
// no longer binds there.
pub const UK_NEEDS_ASSET_CEILING: f64 = 10_000_000.0;
pub const UK_HOMEMAKER_COMP_PER_YEAR: f64 = 100_000.0;
pub const UK_ENFORCEMENT_RATE: f64 = 0.78;

// Marriages strictly longer than this count as long (full asset mingling).
pub const LONG_MARRIAGE_YEARS: u32 = 10;
// Award gaps strictly above this trigger the compensation-gap insight.
pub const GAP_INSIGHT_THRESHOLD: f64 = 100_000.0;

// Defaults applied when neither flags nor a scenario file set a field.
pub const DEFAULT_TOTAL_ASSETS: f64 = 5_000_000.0;
pub const DEFAULT_MARRIAGE_YEARS: u32 = 10;
pub const DEFAULT_HOMEMAKER_YEARS: u32 = 8;
