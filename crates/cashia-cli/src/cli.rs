use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cashia")]
#[command(about = "Pick the most satisfying food your budget allows", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend purchases for the remaining budget
    Plan {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: text or json (default from config)
        #[arg(long)]
        format: Option<String>,
    },

    /// Show budget totals for the whole catalog
    Overview {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: text or json (default from config)
        #[arg(long)]
        format: Option<String>,
    },

    /// Enter budget, transport and items interactively
    Shell,

    /// Create a starter cashia.toml in the current directory
    Init,

    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

/// Where a session's inputs come from. Flags are applied on top of the
/// catalog file: budget and transport replace, items append.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Catalog file (default: cashia.toml in this or a parent directory)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Do not look for cashia.toml
    #[arg(long, conflicts_with = "catalog")]
    pub no_catalog: bool,

    /// Total budget
    #[arg(long, allow_hyphen_values = true)]
    pub budget: Option<String>,

    /// Transport cost deducted from the budget
    #[arg(long, allow_hyphen_values = true)]
    pub transport: Option<String>,

    /// Food item as NAME:RATING:PRICE (repeatable)
    #[arg(long = "item", value_name = "NAME:RATING:PRICE")]
    pub items: Vec<String>,
}
