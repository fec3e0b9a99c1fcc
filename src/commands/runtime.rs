use crate::*;

pub fn handle_runtime_commands(cli: &Cli, kb: &KnowledgeBase) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Compare { scenario } => {
            let s = resolve_scenario(scenario, cli.scenario.as_deref())?;
            let report = compare(kb, &s)?;
            audit(
                "compare",
                serde_json::json!({"total_assets": s.total_assets, "gap": report.gap}),
            );
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                print_comparison(&report);
            }
        }
        Commands::Calculate {
            jurisdiction,
            scenario,
        } => {
            let s = resolve_scenario(scenario, cli.scenario.as_deref())?;
            match jurisdiction {
                Jurisdiction::Cn => {
                    let outcome = calculate_cn(&s)?;
                    audit(
                        "calculate",
                        serde_json::json!({"jurisdiction": "CN", "total": outcome.total}),
                    );
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&JsonOut {
                                ok: true,
                                data: outcome
                            })?
                        );
                    } else {
                        print_cn_breakdown(&outcome);
                    }
                }
                Jurisdiction::Uk => {
                    let outcome = calculate_uk(&s)?;
                    audit(
                        "calculate",
                        serde_json::json!({"jurisdiction": "UK", "total": outcome.total}),
                    );
                    if cli.json {
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&JsonOut {
                                ok: true,
                                data: outcome
                            })?
                        );
                    } else {
                        print_uk_breakdown(&outcome);
                    }
                }
            }
        }
        Commands::Insights { scenario } => {
            let s = resolve_scenario(scenario, cli.scenario.as_deref())?;
            let cn = calculate_cn(&s)?;
            let uk = calculate_uk(&s)?;
            let insights = generate_insights(kb, &s, &cn, &uk)?;
            audit("insights", serde_json::json!({"count": insights.len()}));
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: insights
                    })?
                );
            } else if insights.is_empty() {
                println!("no insights for this scenario");
            } else {
                print_insights(&insights);
            }
        }
        Commands::Validate { scenario } => {
            let s = resolve_scenario(scenario, cli.scenario.as_deref())?;
            audit(
                "validate",
                serde_json::json!({"total_assets": s.total_assets}),
            );
            print_one(cli.json, s, |_| "scenario valid".to_string())?;
        }
        Commands::Kb { .. } => {
            unreachable!("handled before runtime dispatch")
        }
    }

    Ok(())
}

fn print_comparison(report: &ComparisonReport) {
    println!(
        "CN total share: {} (enforcement {})",
        fmt_yuan(report.cn.total),
        fmt_rate(report.cn.enforcement_rate)
    );
    println!(
        "UK total share: {} (driver: {})",
        fmt_yuan(report.uk.total),
        report.uk.driver.describe()
    );
    match report.gap_ratio {
        Some(ratio) => println!(
            "protection gap: {} (UK awards {:.2}x what China awards)",
            fmt_yuan(report.gap),
            ratio
        ),
        None => println!(
            "protection gap: {} (China awards ¥0)",
            fmt_yuan(report.gap)
        ),
    }
    if !report.insights.is_empty() {
        println!();
        print_insights(&report.insights);
    }
}

fn print_insights(insights: &[Insight]) {
    for (i, insight) in insights.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("[{}] {}", insight.level.as_str(), insight.label);
        println!("{}", insight.body);
    }
}

fn print_cn_breakdown(outcome: &CnOutcome) {
    println!("jurisdiction: {}", Jurisdiction::Cn.label());
    println!("pool: {}", fmt_yuan(outcome.pool));
    println!("base share: {}", fmt_yuan(outcome.base_share));
    println!(
        "liquidity discount: {}",
        fmt_yuan(outcome.liquidity_discount)
    );
    println!("effective share: {}", fmt_yuan(outcome.effective_share));
    println!(
        "housework compensation: {}",
        fmt_yuan(outcome.compensation)
    );
    println!("fault damages: {}", fmt_yuan(outcome.fault_adjustment));
    println!(
        "children adjustment: {}",
        fmt_yuan(outcome.children_adjustment)
    );
    println!("total: {}", fmt_yuan(outcome.total));
    println!("enforcement rate: {}", fmt_rate(outcome.enforcement_rate));
    println!("housing: {}", outcome.housing);
}

fn print_uk_breakdown(outcome: &UkOutcome) {
    println!("jurisdiction: {}", Jurisdiction::Uk.label());
    println!("pool: {}", fmt_yuan(outcome.pool));
    println!("sharing base: {}", fmt_yuan(outcome.sharing_base));
    println!("needs outcome: {}", fmt_yuan(outcome.needs_outcome));
    println!(
        "homemaker compensation: {}",
        fmt_yuan(outcome.compensation)
    );
    println!("homemaker outcome: {}", fmt_yuan(outcome.homemaker_outcome));
    println!("total: {}", fmt_yuan(outcome.total));
    println!("driver: {}", outcome.driver.describe());
    println!("enforcement rate: {}", fmt_rate(outcome.enforcement_rate));
    println!("housing: {}", outcome.housing);
    println!("mingling note: {}", outcome.mingling_note);
    println!("needs note: {}", outcome.needs_note);
    println!("compensation note: {}", outcome.compensation_note);
}
