//! Exclude patterns value object
//!
//! Gitignore-style patterns for build output entries that must not be staged.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

use crate::error::{DeployError, DeployResult};

/// Compiled `[deploy] exclude` patterns.
///
/// Paths are matched relative to the build output root.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExcludePatterns {
    /// A pattern set that matches nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile patterns. Blank lines and `#` comments are skipped.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> DeployResult<Self> {
        let mut builder = GitignoreBuilder::new("");
        let mut pattern_count = 0;

        for pattern in patterns {
            let line = pattern.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            builder
                .add_line(None, line)
                .map_err(|e| DeployError::InvalidPattern {
                    pattern: line.to_string(),
                    message: e.to_string(),
                })?;
            pattern_count += 1;
        }

        let matcher = builder.build().map_err(|e| DeployError::InvalidPattern {
            pattern: patterns
                .iter()
                .map(|p| p.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
            message: e.to_string(),
        })?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a relative path (or any of its parents) is excluded.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patterns_match_nothing() {
        let patterns = ExcludePatterns::empty();
        assert!(!patterns.is_excluded(Path::new("LiveCity.Client.dll"), false));
        assert!(patterns.is_empty());
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let patterns = ExcludePatterns::new(&["# symbols", "", "*.pdb"]).unwrap();
        assert_eq!(patterns.pattern_count(), 1);
    }

    #[test]
    fn glob_matches_nested_files() {
        let patterns = ExcludePatterns::new(&["*.pdb"]).unwrap();
        assert!(patterns.is_excluded(Path::new("LiveCity.Server.pdb"), false));
        assert!(patterns.is_excluded(Path::new("runtimes/win/native.pdb"), false));
        assert!(!patterns.is_excluded(Path::new("LiveCity.Server.dll"), false));
    }

    #[test]
    fn directory_pattern_excludes_children() {
        let patterns = ExcludePatterns::new(&["ref/"]).unwrap();
        assert!(patterns.is_excluded(Path::new("ref"), true));
        assert!(patterns.is_excluded(Path::new("ref/System.Runtime.dll"), false));
        assert!(!patterns.is_excluded(Path::new("refs.txt"), false));
    }

    #[test]
    fn negation_re_includes() {
        let patterns = ExcludePatterns::new(&["*.json", "!*.deps.json"]).unwrap();
        assert!(patterns.is_excluded(Path::new("appsettings.json"), false));
        assert!(!patterns.is_excluded(Path::new("LiveCity.Client.deps.json"), false));
    }
}
