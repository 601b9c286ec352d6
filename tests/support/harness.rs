use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated shop directory for running the milktea binary.
/// Each harness creates a temporary directory with .milktea/config.md and points
/// HOME at itself so no global config leaks in.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub milktea_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness with a config where nothing is sold out.
    pub fn new() -> Self {
        Self::with_config(
            r#"---
shop:
  name: Test Tea
menu:
  sold_out: []
---

# Shop Config
"#,
        )
    }

    /// Creates a test harness with custom config content.
    pub fn with_config(config_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join(".milktea");
        let config_path = config_dir.join("config.md");

        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::write(&config_path, config_content).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            milktea_binary: PathBuf::from(env!("CARGO_BIN_EXE_milktea")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the milktea binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.milktea_binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("MILKTEA_QUIET")
            .output()
            .expect("Failed to run milktea")
    }
}

/// Stdout of a finished command as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}
