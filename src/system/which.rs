// src/system/which.rs

//! `PATH` lookup.

use std::env;
use std::path::PathBuf;

/// Returns the first file named `executable_name` found in a `PATH` directory.
pub fn find_executable(executable_name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    find_in_dirs(executable_name, env::split_paths(&path_var))
}

fn find_in_dirs(
    executable_name: &str,
    dirs: impl IntoIterator<Item = PathBuf>,
) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(executable_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_in_dirs_returns_first_match() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::write(second.path().join("blueutil"), b"#!/bin/sh\n").unwrap();

        let found = find_in_dirs(
            "blueutil",
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(found, Some(second.path().join("blueutil")));
    }

    #[test]
    fn test_find_in_dirs_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("blueutil")).unwrap();
        assert_eq!(find_in_dirs("blueutil", vec![dir.path().to_path_buf()]), None);
    }
}
