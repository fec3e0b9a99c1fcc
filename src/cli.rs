use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "fairsplit", version, about = "FairSplit divorce asset outcome simulator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Load scenario fields from a TOML file (explicit flags override it)"
    )]
    pub scenario: Option<std::path::PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Compare {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    Calculate {
        #[arg(value_enum)]
        jurisdiction: Jurisdiction,
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    Insights {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    Validate {
        #[command(flatten)]
        scenario: ScenarioArgs,
    },
    Kb {
        #[command(subcommand)]
        command: KbCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum KbCommands {
    Show {
        #[arg(value_enum)]
        jurisdiction: Jurisdiction,
        #[arg(value_enum)]
        section: KbSection,
        key: String,
    },
    Search {
        tag: String,
    },
    List,
}

#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    #[arg(long, help = "Total combined marital assets (¥)")]
    pub total_assets: Option<f64>,
    #[arg(long, help = "Marriage duration in years")]
    pub marriage_years: Option<u32>,
    #[arg(long, help = "Minor children present (true/false)")]
    pub children: Option<bool>,
    #[arg(long, help = "Wife was a full-time homemaker (true/false)")]
    pub homemaker: Option<bool>,
    #[arg(long, help = "Years spent as homemaker")]
    pub homemaker_years: Option<u32>,
    #[arg(long, help = "Marital home titled to the husband alone (true/false)")]
    pub home_in_husband_name: Option<bool>,
    #[arg(long, help = "Husband at fault: DV, bigamy, abandonment (true/false)")]
    pub fault: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Jurisdiction {
    Cn,
    Uk,
}

impl Jurisdiction {
    pub fn code(&self) -> &'static str {
        match self {
            Jurisdiction::Cn => "CN",
            Jurisdiction::Uk => "UK",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Jurisdiction::Cn => "China (statutory community property)",
            Jurisdiction::Uk => "England & Wales (discretionary distribution)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum KbSection {
    Statutes,
    Cases,
}

impl KbSection {
    pub fn label(&self) -> &'static str {
        match self {
            KbSection::Statutes => "Statutes",
            KbSection::Cases => "Cases",
        }
    }
}
