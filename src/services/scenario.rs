//! Scenario assembly and validation.
//!
//! Precedence when building a `Scenario`: explicit flag, then scenario
//! file field, then built-in default. Validation runs once at the end,
//! and again inside each calculator for callers that construct
//! scenarios directly.

use crate::cli::ScenarioArgs;
use crate::domain::constants::{
    DEFAULT_HOMEMAKER_YEARS, DEFAULT_MARRIAGE_YEARS, DEFAULT_TOTAL_ASSETS,
};
use crate::domain::models::{Scenario, ScenarioFile};
use crate::error::FairsplitError;
use std::path::Path;

pub fn load_scenario_file(path: &Path) -> Result<ScenarioFile, FairsplitError> {
    let raw = std::fs::read_to_string(path).map_err(|e| FairsplitError::ScenarioFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let file: ScenarioFile = toml::from_str(&raw).map_err(|e| FairsplitError::ScenarioFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    log::debug!("loaded scenario file {}", path.display());
    Ok(file)
}

pub fn resolve_scenario(
    args: &ScenarioArgs,
    file_path: Option<&Path>,
) -> Result<Scenario, FairsplitError> {
    let file = match file_path {
        Some(p) => load_scenario_file(p)?,
        None => ScenarioFile::default(),
    };

    let marriage_years = args
        .marriage_years
        .or(file.marriage_years)
        .unwrap_or(DEFAULT_MARRIAGE_YEARS);
    let scenario = Scenario {
        total_assets: args
            .total_assets
            .or(file.total_assets)
            .unwrap_or(DEFAULT_TOTAL_ASSETS),
        marriage_years,
        has_children: args.children.or(file.has_children).unwrap_or(true),
        wife_is_homemaker: args.homemaker.or(file.wife_is_homemaker).unwrap_or(true),
        homemaker_years: args
            .homemaker_years
            .or(file.homemaker_years)
            .unwrap_or_else(|| DEFAULT_HOMEMAKER_YEARS.min(marriage_years)),
        home_in_husband_name: args
            .home_in_husband_name
            .or(file.home_in_husband_name)
            .unwrap_or(true),
        husband_has_fault: args.fault.or(file.husband_has_fault).unwrap_or(false),
    };
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), FairsplitError> {
    if !scenario.total_assets.is_finite() || scenario.total_assets < 0.0 {
        return Err(FairsplitError::InvalidScenario {
            reason: format!(
                "total_assets must be a finite non-negative amount, got {}",
                scenario.total_assets
            ),
        });
    }
    if scenario.homemaker_years > scenario.marriage_years {
        return Err(FairsplitError::InvalidScenario {
            reason: format!(
                "homemaker_years ({}) exceeds marriage_years ({})",
                scenario.homemaker_years, scenario.marriage_years
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{resolve_scenario, validate_scenario};
    use crate::cli::ScenarioArgs;
    use crate::domain::models::Scenario;

    fn no_args() -> ScenarioArgs {
        ScenarioArgs {
            total_assets: None,
            marriage_years: None,
            children: None,
            homemaker: None,
            homemaker_years: None,
            home_in_husband_name: None,
            fault: None,
        }
    }

    #[test]
    fn defaults_describe_the_reference_scenario() {
        let s = resolve_scenario(&no_args(), None).unwrap();
        assert_eq!(s.total_assets, 5_000_000.0);
        assert_eq!(s.marriage_years, 10);
        assert!(s.has_children);
        assert!(s.wife_is_homemaker);
        assert_eq!(s.homemaker_years, 8);
        assert!(s.home_in_husband_name);
        assert!(!s.husband_has_fault);
    }

    #[test]
    fn default_homemaker_years_follow_short_marriages() {
        let mut args = no_args();
        args.marriage_years = Some(5);
        let s = resolve_scenario(&args, None).unwrap();
        assert_eq!(s.homemaker_years, 5);
    }

    #[test]
    fn flags_override_defaults() {
        let mut args = no_args();
        args.total_assets = Some(12_000_000.0);
        args.children = Some(false);
        args.fault = Some(true);
        let s = resolve_scenario(&args, None).unwrap();
        assert_eq!(s.total_assets, 12_000_000.0);
        assert!(!s.has_children);
        assert!(s.husband_has_fault);
    }

    #[test]
    fn resolution_rejects_inconsistent_years() {
        let mut args = no_args();
        args.marriage_years = Some(4);
        args.homemaker_years = Some(9);
        let err = resolve_scenario(&args, None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SCENARIO");
    }

    #[test]
    fn validation_rejects_non_finite_assets() {
        let scenario = Scenario {
            total_assets: f64::INFINITY,
            marriage_years: 10,
            has_children: false,
            wife_is_homemaker: false,
            homemaker_years: 0,
            home_in_husband_name: false,
            husband_has_fault: false,
        };
        assert_eq!(
            validate_scenario(&scenario).unwrap_err().error_code(),
            "INVALID_SCENARIO"
        );
    }
}
