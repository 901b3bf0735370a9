//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Directory with the sample puzzle inputs shipped in the repository.
pub fn sample_inputs() -> PathBuf {
    manifest_dir().join("inputs")
}

/// Compare `actual` with `tests/snapshots/<name>`.
///
/// Set `ADVENT_UPDATE_SNAPSHOTS=1` to rewrite the stored output instead.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = manifest_dir().join("tests").join("snapshots").join(name);

    if std::env::var_os("ADVENT_UPDATE_SNAPSHOTS").is_some() {
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read snapshot {}: {err}", path.display()));
    assert_eq!(
        expected.replace("\r\n", "\n"),
        actual.replace("\r\n", "\n"),
        "output differs from {}; rerun with ADVENT_UPDATE_SNAPSHOTS=1 to accept it",
        path.display()
    );
}
