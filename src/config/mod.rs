//! Configuration management for milktea.
//!
//! Config files are markdown with YAML frontmatter. The global config
//! (`~/.config/milktea/config.md`) is merged under the project config
//! (`.milktea/config.md`); either may be missing.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

pub use defaults::*;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shop: ShopConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/milktea/config.md)
    /// 2. Project config (.milktea/config.md)
    pub fn load() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(crate::paths::CONFIG_FILE),
        )
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Load merged configuration from the given global and project paths.
    /// Missing files contribute nothing.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        Ok(global_config.merge_with(project_config))
    }
}

/// Split `---`-delimited YAML frontmatter from the markdown body.
///
/// The closing delimiter must start a line, so `---` inside a value is kept.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    if !content.starts_with("---") {
        return (None, content);
    }

    let rest = &content[3..];
    match rest.find("\n---") {
        Some(newline) => {
            // Keep the newline that ends the last YAML line
            let frontmatter = rest[..newline + 1].to_string();
            let body = rest[newline + 4..].trim_start();
            (Some(frontmatter), body)
        }
        None => (None, content),
    }
}

/// Returns the path to the global config file at ~/.config/milktea/config.md
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/milktea/config.md"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub shop: Option<PartialShopConfig>,
    pub menu: Option<PartialMenuConfig>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialShopConfig {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialMenuConfig {
    pub sold_out: Option<Vec<crate::product::MilkTeaType>>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let (frontmatter, _body) = split_frontmatter(content);
        let frontmatter = frontmatter.context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_shop = self.shop.unwrap_or_default();
        let global_menu = self.menu.unwrap_or_default();
        let project_shop = project.shop.unwrap_or_default();
        let project_menu = project.menu.unwrap_or_default();

        Config {
            shop: ShopConfig {
                name: project_shop
                    .name
                    .or(global_shop.name)
                    .unwrap_or_else(defaults::default_shop_name),
            },
            menu: MenuConfig {
                // Project list replaces the global list, it is not appended
                sold_out: project_menu
                    .sold_out
                    .or(global_menu.sold_out)
                    .unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests;
