//! CLI entry point and command handlers for milktea.

mod cli;
mod cmd;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use cmd::ui::{Output, OutputMode};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputMode::from_flags(cli.json, cli.quiet));
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Order { recipe, sold_out } => {
            cmd::order::cmd_order(&output, config, &recipe, &sold_out)
        }
        Commands::Custom {
            type_,
            size,
            topping,
            without,
            sold_out,
        } => cmd::order::cmd_custom(
            &output,
            config,
            cmd::order::CustomOrder {
                milk_tea_type: type_.as_deref(),
                size: size.as_deref(),
                toppings: &topping,
                without: &without,
                sold_out: &sold_out,
            },
        ),
        Commands::Menu => cmd::menu::cmd_menu(&output, config),
        Commands::Version { verbose } => cmd::util::cmd_version(verbose),
        Commands::Completion { shell } => cmd::util::cmd_completion(shell),
    }
}
