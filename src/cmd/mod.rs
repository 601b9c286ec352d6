//! Command module structure for milktea CLI

use anyhow::{Context, Result};
use std::path::Path;

use milktea::bartender::Bartender;
use milktea::config::Config;
use milktea::product::MilkTeaType;

pub mod menu;
pub mod order;
pub mod ui;
pub mod util;

/// Load config from an explicit path, or merged global + project config.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Build a bartender from config plus extra `--sold-out` names.
pub fn bartender_for(config: &Config, extra_sold_out: &[String]) -> Result<Bartender> {
    let mut sold_out = config.menu.sold_out.clone();
    for name in extra_sold_out {
        let kind = name
            .parse::<MilkTeaType>()
            .with_context(|| format!("Invalid --sold-out value '{}'", name))?;
        if !sold_out.contains(&kind) {
            sold_out.push(kind);
        }
    }
    Ok(Bartender::with_sold_out_types(sold_out))
}
