use std::path::{Path, PathBuf};

use livecity_deploy::Config;

/// Directory every relative path in a run is resolved against.
///
/// The nearest ancestor of `start` holding `livecity-deploy.toml` wins, even
/// over a closer `.git`, so a config at the solution root covers nested
/// repositories. Without a config the nearest `.git` (directory or worktree
/// file) decides; without either, `start` itself.
pub(crate) fn discover_repo_root(start: &Path) -> PathBuf {
    let nearest = |marker: &str, is_match: fn(&Path) -> bool| {
        start
            .ancestors()
            .find(|dir| is_match(&dir.join(marker)))
            .map(Path::to_path_buf)
    };

    nearest(Config::FILE_NAME, Path::is_file)
        .or_else(|| nearest(".git", Path::exists))
        .unwrap_or_else(|| start.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn config_file_beats_closer_git_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("vendor/.git")).unwrap();
        fs::create_dir_all(root.join("vendor/Client")).unwrap();
        fs::write(root.join(Config::FILE_NAME), "").unwrap();

        assert_eq!(discover_repo_root(&root.join("vendor/Client")), root);
    }

    #[test]
    fn config_directory_named_like_the_file_is_ignored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::create_dir_all(root.join("Server").join(Config::FILE_NAME)).unwrap();

        assert_eq!(discover_repo_root(&root.join("Server")), root);
    }

    #[test]
    fn git_worktree_file_marks_the_root() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".git"), "gitdir: /elsewhere").unwrap();
        fs::create_dir_all(root.join("Client/build")).unwrap();

        assert_eq!(discover_repo_root(&root.join("Client/build")), root);
    }

    #[test]
    fn unmarked_tree_uses_start() {
        let dir = tempdir().unwrap();
        let start = dir.path().join("plain");
        fs::create_dir_all(&start).unwrap();

        assert_eq!(discover_repo_root(&start), start);
    }
}
