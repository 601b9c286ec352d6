use super::*;
use crate::product::MilkTeaType;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_config() {
    let content = r#"---
shop:
  name: Corner Tea

menu:
  sold_out: [Classic, Pearl]
---

# Config
"#;
    let config = Config::parse(content).unwrap();
    assert_eq!(config.shop.name, "Corner Tea");
    assert_eq!(
        config.menu.sold_out,
        vec![MilkTeaType::Classic, MilkTeaType::Pearl]
    );
}

#[test]
fn test_parse_minimal_config() {
    let content = r#"---
shop:
  name: minimal
---
"#;
    let config = Config::parse(content).unwrap();
    assert_eq!(config.shop.name, "minimal");
    assert!(config.menu.sold_out.is_empty());
}

#[test]
fn test_parse_empty_frontmatter_uses_defaults() {
    let config = Config::parse("---\n{}\n---\n").unwrap();
    assert_eq!(config.shop.name, "Milk Tea Bar");
    assert!(config.menu.sold_out.is_empty());
}

#[test]
fn test_parse_missing_frontmatter_fails() {
    let err = Config::parse("# Just a heading\n").unwrap_err();
    assert!(err.to_string().contains("frontmatter"));
}

#[test]
fn test_parse_unknown_type_fails() {
    let content = "---\nmenu:\n  sold_out: [Oolong]\n---\n";
    assert!(Config::parse(content).is_err());
}

#[test]
fn test_split_frontmatter() {
    let (frontmatter, body) = split_frontmatter("---\na: 1\n---\n# Body\n");
    assert_eq!(frontmatter.as_deref(), Some("\na: 1\n"));
    assert_eq!(body, "# Body");

    let (frontmatter, body) = split_frontmatter("no frontmatter");
    assert!(frontmatter.is_none());
    assert_eq!(body, "no frontmatter");
}

#[test]
fn test_split_frontmatter_ignores_dashes_inside_values() {
    let (frontmatter, body) =
        split_frontmatter("---\nshop:\n  name: \"Tea --- Bar\"\n---\n# Body\n");
    assert_eq!(
        frontmatter.as_deref(),
        Some("\nshop:\n  name: \"Tea --- Bar\"\n")
    );
    assert_eq!(body, "# Body");
}

#[test]
fn test_parse_shop_name_with_dashes() {
    let content = r#"---
shop:
  name: "Tea --- Bar"
menu:
  sold_out: [Classic]
---
"#;
    let config = Config::parse(content).unwrap();
    assert_eq!(config.shop.name, "Tea --- Bar");
    assert_eq!(config.menu.sold_out, vec![MilkTeaType::Classic]);
}

#[test]
fn test_split_frontmatter_unclosed() {
    let (frontmatter, body) = split_frontmatter("---\nshop:\n  name: open");
    assert!(frontmatter.is_none());
    assert_eq!(body, "---\nshop:\n  name: open");
}

#[test]
#[serial_test::serial]
fn test_global_config_path() {
    let original = std::env::var("HOME").ok();
    std::env::set_var("HOME", "/home/testuser");
    let path = global_config_path().unwrap();
    let expected = std::path::PathBuf::from("/home/testuser")
        .join(".config")
        .join("milktea")
        .join("config.md");
    assert_eq!(path, expected);

    match original {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }
}

#[test]
fn test_load_merged_no_files() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_merged_from(
        Some(&tmp.path().join("global.md")),
        &tmp.path().join("config.md"),
    )
    .unwrap();
    assert_eq!(config.shop.name, "Milk Tea Bar");
    assert!(config.menu.sold_out.is_empty());
}

#[test]
fn test_load_merged_no_global() {
    let tmp = TempDir::new().unwrap();
    let project_path = tmp.path().join("config.md");

    fs::write(
        &project_path,
        r#"---
menu:
  sold_out: [Matcha]
---
"#,
    )
    .unwrap();

    let config = Config::load_merged_from(None, &project_path).unwrap();
    assert_eq!(config.menu.sold_out, vec![MilkTeaType::Matcha]);
}

#[test]
fn test_load_merged_project_overrides_global() {
    let tmp = TempDir::new().unwrap();
    let global_path = tmp.path().join("global.md");
    let project_path = tmp.path().join("config.md");

    fs::write(
        &global_path,
        r#"---
shop:
  name: Global Tea
menu:
  sold_out: [Classic]
---
"#,
    )
    .unwrap();
    fs::write(
        &project_path,
        r#"---
menu:
  sold_out: [Pearl]
---
"#,
    )
    .unwrap();

    let config = Config::load_merged_from(Some(&global_path), &project_path).unwrap();
    // Shop name comes from global, sold-out list from project
    assert_eq!(config.shop.name, "Global Tea");
    assert_eq!(config.menu.sold_out, vec![MilkTeaType::Pearl]);
}

#[test]
fn test_load_from_reports_path() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("nope.md");
    let err = Config::load_from(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.md"));
}
