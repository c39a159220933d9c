//! Test harness for dircnt integration tests

use std::path::Path;
use std::process::Command;

pub use dircnt::test_utils::TestTree;

/// Run the dircnt binary in `dir`. Returns (stdout, stderr, exit code).
pub fn run_dircnt(dir: &Path, args: &[&str]) -> (String, String, Option<i32>) {
    let binary = env!("CARGO_BIN_EXE_dircnt");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run dircnt");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.txt", "hello");
        assert!(file_path.exists());
    }
}
