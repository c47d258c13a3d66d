// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn aidigest_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aidigest"));
    // Keep a developer's real key out of the tests.
    cmd.env_remove("GROQ_API_KEY");
    cmd
}

/// Writes `content` to `relative_path` under `root`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative_path: &str, content: impl AsRef<[u8]>) {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
