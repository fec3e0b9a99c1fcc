//! Narrative insights over a computed outcome pair.
//!
//! Five independent rules, evaluated in a fixed order so output is stable.
//! Every citation goes through the knowledge base and fails fast with
//! `MissingKnowledgeEntry` instead of emitting an uncited claim.

use crate::cli::Jurisdiction;
use crate::domain::constants::{GAP_INSIGHT_THRESHOLD, LONG_MARRIAGE_YEARS};
use crate::domain::models::{CnOutcome, Insight, InsightLevel, Scenario, UkOutcome};
use crate::error::FairsplitError;
use crate::services::knowledge::KnowledgeBase;
use crate::services::output::fmt_yuan;

pub fn generate_insights(
    kb: &KnowledgeBase,
    scenario: &Scenario,
    cn: &CnOutcome,
    uk: &UkOutcome,
) -> Result<Vec<Insight>, FairsplitError> {
    let mut insights = Vec::new();

    if uk.total - cn.total > GAP_INSIGHT_THRESHOLD {
        let art1088 = kb.statute(Jurisdiction::Cn, "Art_1088")?;
        let lei = kb.case(Jurisdiction::Cn, "Guiding_Case_66")?;
        insights.push(Insight {
            level: InsightLevel::Warning,
            label: "CN housework compensation gap".to_string(),
            body: format!(
                "Despite {} (Civil Code Art 1088), housework compensation in China \
                 is usually symbolic: awards average ¥30,000-80,000 and only 26.92% \
                 of claims win court approval. Here the CN framework awards {} for \
                 homemaking while the UK framework values the same contribution at \
                 {}, a {} gap. {} shows that even proven misconduct draws narrow \
                 statutory awards rather than equitable redistribution.",
                art1088.title,
                fmt_yuan(cn.compensation),
                fmt_yuan(uk.compensation),
                fmt_yuan(uk.compensation - cn.compensation),
                lei.title
            ),
        });
    }

    if scenario.wife_is_homemaker {
        let white = kb.case(Jurisdiction::Uk, "White_v_White")?;
        let miller = kb.case(Jurisdiction::Uk, "Miller_v_Miller")?;
        let mut body = format!(
            "English law treats homemaking as a contribution equal to earning. \
             {} set the yardstick of equality",
            white.title
        );
        if let Some(quote) = &white.quote {
            body.push_str(&format!(": \"{}\" ({})", quote.text, quote.attribution));
        }
        body.push_str(&format!(
            ". {} added compensation for relationship-generated disadvantage; in \
             McFarlane a solicitor turned homemaker received £250,000 a year in \
             periodical payments as compensation for her foregone career, not as \
             maintenance.",
            miller.title
        ));
        insights.push(Insight {
            level: InsightLevel::Success,
            label: "UK non-financial contribution protection".to_string(),
            body,
        });
    }

    if scenario.has_children {
        let mca25 = kb.statute(Jurisdiction::Uk, "MCA_Sec25")?;
        let children_act = kb.statute(Jurisdiction::Uk, "Children_Act_1989")?;
        let art1087 = kb.statute(Jurisdiction::Cn, "Art_1087")?;
        insights.push(Insight {
            level: InsightLevel::Info,
            label: "Children's welfare and the needs principle".to_string(),
            body: format!(
                "Both jurisdictions prioritise children, with very different teeth. \
                 Under {} the welfare of any minor child is the court's first \
                 consideration, which in practice pushes the primary carer's share \
                 to 55-65% to secure housing; the {} adds a statutory welfare \
                 checklist. China's {} directs courts to follow \
                 照顾子女、女方和无过错方权益的原则 (the principle of protecting \
                 the children, the wife and the innocent party), which typically \
                 means a 2-5% tilt from the 50/50 baseline and no housing right \
                 for the custodial parent.",
                mca25.title, children_act.title, art1087.source
            ),
        });
    }

    if scenario.marriage_years > LONG_MARRIAGE_YEARS {
        let white = kb.case(Jurisdiction::Uk, "White_v_White")?;
        let art1062 = kb.statute(Jurisdiction::Cn, "Art_1062")?;
        insights.push(Insight {
            level: InsightLevel::Info,
            label: "Long marriage and asset mingling".to_string(),
            body: format!(
                "After {} years of marriage, English courts treat virtually all \
                 assets as matrimonial property subject to equal sharing under {}, \
                 and pre-marital contributions carry diminishing weight. In China \
                 the statutory 50/50 split of {} applies regardless of duration, \
                 but enforcement gaps and liquidity discounts erode the wife's \
                 effective share.",
                scenario.marriage_years, white.title, art1062.title
            ),
        });
    }

    if cn.fault_adjustment > 0.0 {
        let art1091 = kb.statute(Jurisdiction::Cn, "Art_1091")?;
        let xie = kb.case(Jurisdiction::Cn, "Xie_v_He")?;
        insights.push(Insight {
            level: InsightLevel::Warning,
            label: "Fault and domestic violence".to_string(),
            body: format!(
                "Under {} (Art 1091) the innocent party may claim damages for \
                 bigamy, domestic violence, maltreatment or abandonment, but awards \
                 typically run at 3-5% of total assets. In {} the court issued a \
                 prior judgment (先行判决) dissolving the marriage at once while the \
                 damages claim proceeded separately, so the victim was not trapped \
                 in the marriage for the length of the litigation.",
                art1091.title, xie.title
            ),
        });
    }

    log::debug!("generated {} insights", insights.len());
    Ok(insights)
}

#[cfg(test)]
mod tests {
    use super::generate_insights;
    use crate::domain::models::{AwardDriver, CnOutcome, InsightLevel, Scenario, UkOutcome};
    use crate::services::calculator::{calculate_cn, calculate_uk};
    use crate::services::knowledge::KnowledgeBase;

    fn reference_scenario() -> Scenario {
        Scenario {
            total_assets: 5_000_000.0,
            marriage_years: 10,
            has_children: true,
            wife_is_homemaker: true,
            homemaker_years: 8,
            home_in_husband_name: true,
            husband_has_fault: false,
        }
    }

    fn quiet_scenario() -> Scenario {
        Scenario {
            total_assets: 1_000_000.0,
            marriage_years: 5,
            has_children: false,
            wife_is_homemaker: false,
            homemaker_years: 0,
            home_in_husband_name: false,
            husband_has_fault: false,
        }
    }

    fn outcome_pair(cn_total: f64, uk_total: f64) -> (CnOutcome, UkOutcome) {
        let cn = CnOutcome {
            pool: 1_000_000.0,
            base_share: 500_000.0,
            liquidity_discount: 0.0,
            effective_share: 500_000.0,
            compensation: 0.0,
            fault_adjustment: 0.0,
            children_adjustment: 0.0,
            total: cn_total,
            enforcement_rate: 0.30,
            housing: "Standard division".to_string(),
        };
        let uk = UkOutcome {
            pool: 1_000_000.0,
            sharing_base: 500_000.0,
            needs_outcome: 500_000.0,
            compensation: 0.0,
            homemaker_outcome: 500_000.0,
            total: uk_total,
            driver: AwardDriver::Needs,
            enforcement_rate: 0.78,
            housing: "Equitable division of housing".to_string(),
            mingling_note: String::new(),
            needs_note: String::new(),
            compensation_note: String::new(),
        };
        (cn, uk)
    }

    fn computed(scenario: &Scenario) -> (CnOutcome, UkOutcome) {
        (
            calculate_cn(scenario).unwrap(),
            calculate_uk(scenario).unwrap(),
        )
    }

    #[test]
    fn reference_scenario_emits_three_insights() {
        let kb = KnowledgeBase::bundled();
        let s = reference_scenario();
        let (cn, uk) = computed(&s);
        let insights = generate_insights(&kb, &s, &cn, &uk).unwrap();
        let labels: Vec<&str> = insights.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "CN housework compensation gap",
                "UK non-financial contribution protection",
                "Children's welfare and the needs principle",
            ]
        );
        let levels: Vec<InsightLevel> = insights.iter().map(|i| i.level).collect();
        assert_eq!(
            levels,
            [
                InsightLevel::Warning,
                InsightLevel::Success,
                InsightLevel::Info,
            ]
        );
    }

    #[test]
    fn all_five_rules_fire_in_fixed_order() {
        let kb = KnowledgeBase::bundled();
        let mut s = reference_scenario();
        s.marriage_years = 11;
        s.husband_has_fault = true;
        let (cn, uk) = computed(&s);
        let insights = generate_insights(&kb, &s, &cn, &uk).unwrap();
        let labels: Vec<&str> = insights.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "CN housework compensation gap",
                "UK non-financial contribution protection",
                "Children's welfare and the needs principle",
                "Long marriage and asset mingling",
                "Fault and domestic violence",
            ]
        );
    }

    #[test]
    fn gap_rule_requires_strictly_more_than_the_threshold() {
        let kb = KnowledgeBase::bundled();
        let s = quiet_scenario();
        let (cn, uk) = outcome_pair(500_000.0, 600_000.0);
        assert!(generate_insights(&kb, &s, &cn, &uk).unwrap().is_empty());

        let (cn, uk) = outcome_pair(500_000.0, 600_001.0);
        let insights = generate_insights(&kb, &s, &cn, &uk).unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].label, "CN housework compensation gap");
    }

    #[test]
    fn long_marriage_rule_is_strictly_greater_than_ten() {
        let kb = KnowledgeBase::bundled();
        let mut s = reference_scenario();
        let (cn, uk) = computed(&s);
        let at_ten = generate_insights(&kb, &s, &cn, &uk).unwrap();
        assert!(at_ten
            .iter()
            .all(|i| i.label != "Long marriage and asset mingling"));

        s.marriage_years = 11;
        let (cn, uk) = computed(&s);
        let at_eleven = generate_insights(&kb, &s, &cn, &uk).unwrap();
        assert!(at_eleven
            .iter()
            .any(|i| i.label == "Long marriage and asset mingling"));
    }

    #[test]
    fn fault_rule_keys_off_the_computed_adjustment() {
        let kb = KnowledgeBase::bundled();
        let s = quiet_scenario();
        let (mut cn, uk) = outcome_pair(500_000.0, 500_000.0);
        cn.fault_adjustment = 1.0;
        let insights = generate_insights(&kb, &s, &cn, &uk).unwrap();
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].label, "Fault and domestic violence");
        assert_eq!(insights[0].level, InsightLevel::Warning);
    }

    #[test]
    fn homemaker_insight_quotes_white_v_white() {
        let kb = KnowledgeBase::bundled();
        let s = reference_scenario();
        let (cn, uk) = computed(&s);
        let insights = generate_insights(&kb, &s, &cn, &uk).unwrap();
        let body = &insights[1].body;
        assert!(body.contains("no bias in favour of the money-earner"));
        assert!(body.contains("Lord Nicholls"));
    }

    #[test]
    fn gap_insight_reports_the_compensation_gap() {
        let kb = KnowledgeBase::bundled();
        let s = reference_scenario();
        let (cn, uk) = computed(&s);
        let insights = generate_insights(&kb, &s, &cn, &uk).unwrap();
        let body = &insights[0].body;
        assert!(body.contains("¥760,000"));
        assert!(body.contains("26.92%"));
    }

    #[test]
    fn missing_kb_entry_surfaces_as_error() {
        let kb = KnowledgeBase::empty();
        let s = reference_scenario();
        let (cn, uk) = computed(&s);
        let err = generate_insights(&kb, &s, &cn, &uk).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_KNOWLEDGE_ENTRY");
    }
}
