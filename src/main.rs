use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod services;

pub use cli::*;
pub use domain::models::*;
pub use error::FairsplitError;
pub use services::calculator::{calculate_cn, calculate_uk, compare};
pub use services::insights::generate_insights;
pub use services::knowledge::KnowledgeBase;
pub use services::output::{fmt_amount, fmt_rate, fmt_yuan, print_one, print_out};
pub use services::scenario::{load_scenario_file, resolve_scenario, validate_scenario};
pub use services::storage::audit;

use commands::{handle_kb_commands, handle_runtime_commands};

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        let code = err
            .downcast_ref::<FairsplitError>()
            .map(FairsplitError::error_code)
            .unwrap_or("INTERNAL");
        if cli.json {
            let envelope = serde_json::json!({
                "ok": false,
                "error": { "code": code, "message": format!("{:#}", err) }
            });
            if let Ok(body) = serde_json::to_string_pretty(&envelope) {
                println!("{}", body);
            }
        } else {
            eprintln!("error: {:#}", err);
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let kb = KnowledgeBase::bundled();

    if handle_kb_commands(cli, &kb)? {
        return Ok(());
    }

    handle_runtime_commands(cli, &kb)
}
