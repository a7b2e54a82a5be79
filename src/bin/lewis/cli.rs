use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "lewis",
    about = "Lewis structure and VSEPR geometry prediction",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict the Lewis structure and geometry of a formula
    #[command(visible_alias = "p")]
    Predict(PredictArgs),

    /// Print the active VSEPR geometry table
    #[command(visible_alias = "t")]
    Table(TableArgs),
}

/// Output options shared by all commands.
#[derive(Args)]
pub struct OutputOptions {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress banner, progress, and summary output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// VSEPR table selection shared by all commands.
#[derive(Args)]
#[command(next_help_heading = "Geometry")]
pub struct TableOptions {
    /// Custom VSEPR table (TOML file)
    #[arg(long, value_name = "FILE")]
    pub vsepr: Option<PathBuf>,
}

/// Octet search and ranking options.
#[derive(Args)]
#[command(next_help_heading = "Search")]
pub struct SearchOptions {
    /// Pruning policy for the octet search
    #[arg(long, value_name = "POLICY", default_value = "strict")]
    pub policy: SearchPolicy,

    /// Rule separating structures with equal formal-charge scores
    #[arg(long = "tie-break", value_name = "RULE", default_value = "placement")]
    pub tie_break: TieBreak,

    /// Maximum search nodes evaluated before the search is truncated
    #[arg(long = "max-nodes", value_name = "N", default_value = "250000")]
    pub max_nodes: usize,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Chemical formula, e.g. CO2, NH4+, SO4-2 (read from stdin if omitted)
    #[arg(value_name = "FORMULA", allow_hyphen_values = true)]
    pub formula: Option<String>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub search: SearchOptions,

    #[command(flatten)]
    pub table: TableOptions,
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub table: TableOptions,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum SearchPolicy {
    /// Prune charged halogens and stop at stable octets
    #[default]
    Strict,
    /// Record every node; only the second-row octet cap applies
    #[value(alias = "full")]
    Exhaustive,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum TieBreak {
    /// Prefer negative charge on the most electronegative atoms
    #[default]
    Placement,
    /// Continuous electronegativity-weighted charge penalty
    #[value(alias = "en-penalty")]
    Penalty,
}

impl From<SearchPolicy> for lewis_vsepr::SearchPolicy {
    fn from(policy: SearchPolicy) -> Self {
        match policy {
            SearchPolicy::Strict => Self::Strict,
            SearchPolicy::Exhaustive => Self::Exhaustive,
        }
    }
}

impl From<TieBreak> for lewis_vsepr::TieBreak {
    fn from(rule: TieBreak) -> Self {
        match rule {
            TieBreak::Placement => Self::ChargePlacement,
            TieBreak::Penalty => Self::ElectronegativityPenalty,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
