//! Property tests for tree mirroring through `DeployUseCase`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use proptest::prelude::*;
use tempfile::TempDir;

use livecity_deploy::application::DeployUseCase;
use livecity_deploy::domain::value_objects::{ExcludePatterns, ReplaceStrategy};
use livecity_deploy::{Artifact, CommandBuildRunner, DeployOptions, LocalFs};

/// Relative file path → content. No path is a prefix directory of another.
fn file_tree() -> impl Strategy<Value = BTreeMap<String, String>> {
    let segment = proptest::string::string_regex("[a-z]{1,6}").unwrap();
    let extension = prop_oneof![Just(""), Just(".dll"), Just(".pdb"), Just(".json")];
    let path = (proptest::collection::vec(segment, 1..=3), extension)
        .prop_map(|(segments, ext)| format!("{}{}", segments.join("/"), ext));
    let content = proptest::string::string_regex("[ -~]{0,32}").unwrap();

    proptest::collection::btree_map(path, content, 0..12).prop_map(|tree| {
        let keys: Vec<String> = tree.keys().cloned().collect();
        tree.into_iter()
            .filter(|(path, _)| {
                !keys
                    .iter()
                    .any(|other| other.starts_with(&format!("{}/", path)))
            })
            .collect()
    })
}

fn write_tree(root: &Path, tree: &BTreeMap<String, String>) {
    fs::create_dir_all(root).unwrap();
    for (rel, content) in tree {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn read_tree(root: &Path) -> BTreeMap<String, String> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                let key: Vec<String> = rel
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.insert(key.join("/"), fs::read_to_string(&path).unwrap());
            }
        }
    }

    let mut out = BTreeMap::new();
    if root.exists() {
        walk(root, root, &mut out);
    }
    out
}

struct Fixture {
    _dir: TempDir,
    options: DeployOptions,
    build_output: std::path::PathBuf,
    deployed: std::path::PathBuf,
    dist: std::path::PathBuf,
}

fn fixture(build: &BTreeMap<String, String>, stale: &BTreeMap<String, String>) -> Fixture {
    let dir = TempDir::new().unwrap();
    let repo = dir.path().join("repo");
    let resources = dir.path().join("resources");

    let build_output = repo.join("Client/build/DebugLocal/publish");
    write_tree(&build_output, build);
    fs::write(repo.join("Client/resource.toml"), "type = \"csharp\"\n").unwrap();

    let deployed = resources.join(Artifact::CLIENT);
    if !stale.is_empty() {
        write_tree(&deployed, stale);
    }

    Fixture {
        options: DeployOptions::new(&repo, &resources).with_skip_build(true),
        dist: repo.join("dist").join(Artifact::CLIENT),
        _dir: dir,
        build_output,
        deployed,
    }
}

fn expected(build: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut expected = build.clone();
    expected.insert("resource.toml".to_string(), "type = \"csharp\"\n".to_string());
    expected
}

fn use_case() -> DeployUseCase<LocalFs, CommandBuildRunner> {
    DeployUseCase::new(LocalFs::new(), CommandBuildRunner::new())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after a deploy, dist and deployed hold exactly the build
    /// output plus the metadata file, whatever was deployed before.
    #[test]
    fn property_deployed_tree_mirrors_build_output(
        build in file_tree(),
        stale in file_tree(),
        in_place in any::<bool>(),
    ) {
        let f = fixture(&build, &stale);
        let strategy = if in_place { ReplaceStrategy::InPlace } else { ReplaceStrategy::Atomic };
        let options = f.options.clone().with_strategy(strategy);

        let report = use_case().execute(&Artifact::client(), &options).unwrap();

        prop_assert_eq!(read_tree(&f.deployed), expected(&build));
        prop_assert_eq!(read_tree(&f.dist), expected(&build));
        prop_assert_eq!(report.deployed_files, build.len() + 1);
        prop_assert_eq!(read_tree(&f.build_output), build);
    }

    /// PROPERTY: two consecutive deploys give the same trees.
    #[test]
    fn property_deploy_is_idempotent(build in file_tree()) {
        let f = fixture(&build, &BTreeMap::new());

        use_case().execute(&Artifact::client(), &f.options).unwrap();
        let first = read_tree(&f.deployed);
        use_case().execute(&Artifact::client(), &f.options).unwrap();

        prop_assert_eq!(read_tree(&f.deployed), first);
    }

    /// PROPERTY: excluded files never reach dist or deployed; the metadata
    /// file always does.
    #[test]
    fn property_excluded_files_are_not_staged(build in file_tree()) {
        let f = fixture(&build, &BTreeMap::new());
        let options = f
            .options
            .clone()
            .with_exclude(ExcludePatterns::new(&["*.pdb"]).unwrap());

        use_case().execute(&Artifact::client(), &options).unwrap();

        let mut wanted: BTreeMap<String, String> = build
            .into_iter()
            .filter(|(path, _)| !path.ends_with(".pdb"))
            .collect();
        wanted.insert("resource.toml".to_string(), "type = \"csharp\"\n".to_string());
        prop_assert_eq!(read_tree(&f.deployed), wanted);
    }
}
