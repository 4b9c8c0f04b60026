//! Custom assertion macros for CLI tests.

use std::path::Path;

/// Every regular file under `dir`, as sorted `/`-separated relative paths.
/// A missing directory yields an empty list.
pub fn tree_files(dir: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else if let Ok(rel) = path.strip_prefix(root) {
                let parts: Vec<String> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(parts.join("/"));
            }
        }
    }

    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Deploy Complete");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a directory holds exactly the given relative files.
///
/// # Example
/// ```ignore
/// assert_tree_eq!(env.deployed_dir("livecity-client"), ["a.txt", "resource.toml"]);
/// ```
#[macro_export]
macro_rules! assert_tree_eq {
    ($dir:expr, [$($file:expr),* $(,)?]) => {{
        let owned = $dir;
        let dir: &std::path::Path = owned.as_ref();
        let mut expected: Vec<String> = vec![$($file.to_string()),*];
        expected.sort();
        assert_eq!(
            $crate::common::tree_files(dir),
            expected,
            "unexpected file set under {}",
            dir.display()
        );
    }};
}

/// Assert that a command failed with exit code 1.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {
        assert_eq!(
            $result.exit_code, 1,
            "Expected exit code 1\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
