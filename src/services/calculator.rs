//! Closed-form outcome calculators for the two divorce regimes.
//!
//! Pure functions over `Scenario`: no I/O, no clock, no randomness, so
//! repeated evaluation is bit-identical. `calculate_cn` leaves the total
//! unclamped; `calculate_uk` caps at the pool.

use crate::domain::constants::*;
use crate::domain::models::{AwardDriver, CnOutcome, ComparisonReport, Scenario, UkOutcome};
use crate::error::FairsplitError;
use crate::services::insights::generate_insights;
use crate::services::knowledge::KnowledgeBase;
use crate::services::output::fmt_amount;
use crate::services::scenario::validate_scenario;

pub fn calculate_cn(scenario: &Scenario) -> Result<CnOutcome, FairsplitError> {
    validate_scenario(scenario)?;
    let pool = scenario.total_assets;
    let base_share = pool * CN_BASE_SHARE_RATE;
    let liquidity_discount = if scenario.home_in_husband_name {
        base_share * CN_LIQUIDITY_DISCOUNT_RATE
    } else {
        0.0
    };
    let effective_share = base_share - liquidity_discount;
    let compensation = if scenario.wife_is_homemaker && scenario.homemaker_years > 0 {
        f64::from(scenario.homemaker_years) * CN_HOMEMAKER_COMP_PER_YEAR
    } else {
        0.0
    };
    let fault_adjustment = if scenario.husband_has_fault {
        pool * CN_FAULT_ADJUSTMENT_RATE
    } else {
        0.0
    };
    let children_adjustment = if scenario.has_children {
        pool * CN_CHILDREN_ADJUSTMENT_RATE
    } else {
        0.0
    };
    let total = effective_share + compensation + fault_adjustment + children_adjustment;
    log::debug!("cn outcome: pool {} total {}", pool, total);
    Ok(CnOutcome {
        pool,
        base_share,
        liquidity_discount,
        effective_share,
        compensation,
        fault_adjustment,
        children_adjustment,
        total,
        enforcement_rate: CN_ENFORCEMENT_RATE,
        housing: if scenario.home_in_husband_name {
            "Wife loses home; cash discount applied"
        } else {
            "Standard division"
        }
        .to_string(),
    })
}

pub fn calculate_uk(scenario: &Scenario) -> Result<UkOutcome, FairsplitError> {
    validate_scenario(scenario)?;
    let pool = scenario.total_assets;
    let sharing_base = pool * UK_SHARING_RATE;

    let mingling_note = if scenario.marriage_years > LONG_MARRIAGE_YEARS {
        "All assets treated as matrimonial (White v White)"
    } else {
        "Short marriage: pre-marital assets may be ring-fenced"
    }
    .to_string();

    let needs_override = scenario.has_children && pool < UK_NEEDS_ASSET_CEILING;
    let (needs_outcome, needs_note) = if needs_override {
        (
            pool * UK_NEEDS_RATE,
            "Needs override: 60% to wife for children's housing security".to_string(),
        )
    } else {
        (sharing_base, "Standard 50% sharing applies".to_string())
    };

    let (compensation, homemaker_outcome, compensation_note) =
        if scenario.wife_is_homemaker && scenario.homemaker_years > 0 {
            let compensation = f64::from(scenario.homemaker_years) * UK_HOMEMAKER_COMP_PER_YEAR;
            let note = format!(
                "Replacement cost: {} yrs x 100,000 = {}",
                scenario.homemaker_years,
                fmt_amount(compensation)
            );
            (compensation, sharing_base + compensation, note)
        } else {
            (0.0, sharing_base, "No homemaker compensation".to_string())
        };

    // Winning strand first, then the pool cap; ties go to needs.
    let total = needs_outcome.max(homemaker_outcome).min(pool);
    let driver = if needs_outcome >= homemaker_outcome {
        AwardDriver::Needs
    } else {
        AwardDriver::Compensation
    };
    log::debug!("uk outcome: pool {} total {} driver {:?}", pool, total, driver);
    Ok(UkOutcome {
        pool,
        sharing_base,
        needs_outcome,
        compensation,
        homemaker_outcome,
        total,
        driver,
        enforcement_rate: UK_ENFORCEMENT_RATE,
        housing: if scenario.has_children {
            "Wife keeps home for children"
        } else {
            "Equitable division of housing"
        }
        .to_string(),
        mingling_note,
        needs_note,
        compensation_note,
    })
}

pub fn compare(
    kb: &KnowledgeBase,
    scenario: &Scenario,
) -> Result<ComparisonReport, FairsplitError> {
    let cn = calculate_cn(scenario)?;
    let uk = calculate_uk(scenario)?;
    let insights = generate_insights(kb, scenario, &cn, &uk)?;
    let gap = uk.total - cn.total;
    let gap_ratio = if cn.total > 0.0 {
        Some(uk.total / cn.total)
    } else {
        None
    };
    let compensation_gap = uk.compensation - cn.compensation;
    let enforcement_gap = uk.enforcement_rate - cn.enforcement_rate;
    Ok(ComparisonReport {
        scenario: scenario.clone(),
        cn,
        uk,
        gap,
        gap_ratio,
        compensation_gap,
        enforcement_gap,
        insights,
    })
}
