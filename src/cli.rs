//! CLI argument definitions for milktea.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "milktea")]
#[command(version)]
#[command(about = "Order milk tea from a bartender who follows recipes", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    milktea menu               Show recipes and what is sold out\n    milktea order classic      Order the classic recipe\n    milktea custom --type pearl --size large --topping aloe-jelly"
)]
pub struct Cli {
    /// Suppress all non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit one JSON object per line instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of .milktea/config.md
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Order a recipe from the bartender
    Order {
        /// Recipe name (classic, matcha)
        recipe: String,
        /// Mark a drink type as sold out (can be specified multiple times)
        #[arg(long = "sold-out", value_name = "TYPE")]
        sold_out: Vec<String>,
    },
    /// Build a drink step by step
    Custom {
        /// Drink type (classic, matcha, pearl); defaults to classic
        #[arg(long = "type", value_name = "TYPE")]
        type_: Option<String>,
        /// Cup size (small, medium, large); defaults to medium
        #[arg(long)]
        size: Option<String>,
        /// Add a topping (can be specified multiple times)
        #[arg(long, value_name = "TOPPING")]
        topping: Vec<String>,
        /// Remove a topping after adding (can be specified multiple times)
        #[arg(long, value_name = "TOPPING")]
        without: Vec<String>,
        /// Mark a drink type as sold out (can be specified multiple times)
        #[arg(long = "sold-out", value_name = "TYPE")]
        sold_out: Vec<String>,
    },
    /// Show recipes, drink types, sizes and toppings
    Menu,
    /// Show version information
    Version {
        /// Show additional build information
        #[arg(long, short)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}
