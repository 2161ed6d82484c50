//! Common test utilities for CLI integration tests.
//!
//! Each [`TestEnv`] owns a temporary directory holding a menu file and an
//! assignments file, and hands out commands pointed at them.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Menu forest used by most tests.
///
/// ```text
/// system (FOLDER, "system")
///   users (MENU, "users")
///   roles (MENU, "/roles")
/// reports (FOLDER, "reports")
///   daily (MENU, "daily")
/// orphan (MENU, no route)  -- pruned
/// ```
pub const MENUS_JSON: &str = r#"[
  {
    "id": "system", "key": "System", "menuType": "FOLDER", "route": "system",
    "children": [
      { "id": "users", "key": "Users", "menuType": "MENU", "route": "users" },
      { "id": "roles", "key": "Roles", "menuType": "MENU", "route": "/roles" }
    ]
  },
  {
    "id": "reports", "key": "Reports", "menuType": "FOLDER", "route": "reports",
    "children": [
      { "id": "daily", "key": "Daily", "menuType": "MENU", "route": "daily" }
    ]
  },
  { "id": "orphan", "key": "Orphan", "menuType": "MENU" }
]"#;

/// Isolated test environment.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// A fresh environment whose menu file holds [`MENUS_JSON`].
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let env = Self {
            temp_dir,
            temp_path,
        };
        env.write("menus.json", MENUS_JSON);
        env
    }

    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    pub fn menu_file(&self) -> PathBuf {
        self.temp_path.join("menus.json")
    }

    pub fn assignments_file(&self) -> PathBuf {
        self.temp_path.join("assignments.json")
    }

    /// The binary, run inside the environment with every `MENUTREE_*`
    /// variable cleared and `HOME` pointing at the environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("menutree").expect("Failed to find menutree binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("MENUTREE_MENU_FILE")
            .env_remove("MENUTREE_ASSIGNMENTS_FILE")
            .env_remove("MENUTREE_DEFAULT_ROLE")
            .env_remove("MENUTREE_OUTPUT_FORMAT")
            .env_remove("MENUTREE_LOG_MODE");
        cmd
    }

    /// The binary with `--menu-file` and `--assignments-file` set.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--menu-file")
            .arg(self.menu_file())
            .arg("--assignments-file")
            .arg(self.assignments_file());
        cmd
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// The ids saved for `role`, or an empty list.
    pub fn saved_ids(&self, role: &str) -> Vec<String> {
        let Ok(contents) = fs::read_to_string(self.assignments_file()) else {
            return Vec::new();
        };
        let document: serde_json::Value =
            serde_json::from_str(&contents).expect("assignments file is not JSON");
        document[role]["menuIds"]
            .as_array()
            .map(|ids| {
                ids.iter()
                    .map(|v| v.as_str().unwrap_or_default().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}
