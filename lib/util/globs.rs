/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use starlark_map::small_set::SmallSet;

use crate::util::fs_anyhow;
use crate::util::listing::FileList;

/// Glob patterns naming fixture files. A pattern that matches a directory
/// includes every Python file below it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Globs(Vec<String>);

impl Globs {
    pub fn new(patterns: Vec<String>) -> Self {
        Self(patterns)
    }

    fn is_python_extension(ext: Option<&OsStr>) -> bool {
        ext.is_some_and(|e| e == "py" || e == "pyi")
    }

    fn resolve_dir(path: &Path, results: &mut Vec<PathBuf>) -> anyhow::Result<()> {
        let mut entries = Vec::new();
        for entry in fs_anyhow::read_dir(path)? {
            let entry = entry
                .with_context(|| format!("When iterating over directory `{}`", path.display()))?;
            entries.push(entry.path());
        }
        // read_dir order is platform dependent.
        entries.sort();
        for path in entries {
            if path.is_dir() {
                Self::resolve_dir(&path, results)?;
            } else if Self::is_python_extension(path.extension()) {
                results.push(path);
            }
        }
        Ok(())
    }

    fn resolve_pattern(pattern: &str) -> anyhow::Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        for path in glob::glob(pattern)? {
            let path = path?;
            if path.is_dir() {
                Self::resolve_dir(&path, &mut result)?;
            } else if Self::is_python_extension(path.extension()) {
                result.push(path);
            }
        }
        Ok(result)
    }
}

impl FileList for Globs {
    fn files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut result = SmallSet::new();
        for pattern in &self.0 {
            let res = Self::resolve_pattern(pattern)
                .with_context(|| format!("When resolving pattern `{pattern}`"))?;
            if res.is_empty() {
                return Err(anyhow::anyhow!("No fixtures matched pattern `{}`", pattern));
            }
            result.extend(res);
        }
        Ok(result.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_files() {
        let tdir = tempfile::tempdir().unwrap();
        let expected = tdir.path().join("expected");
        fs::create_dir_all(expected.join("nested")).unwrap();
        fs::write(expected.join("b_quickfixed.py"), "").unwrap();
        fs::write(expected.join("a_quickfixed.py"), "").unwrap();
        fs::write(expected.join("nested/c_quickfixed.pyi"), "").unwrap();
        fs::write(expected.join("notes.txt"), "").unwrap();

        let globs = Globs::new(vec![expected.to_string_lossy().into_owned()]);
        let files = globs.files().unwrap();
        assert_eq!(
            files,
            vec![
                expected.join("a_quickfixed.py"),
                expected.join("b_quickfixed.py"),
                expected.join("nested/c_quickfixed.pyi"),
            ]
        );
    }

    #[test]
    fn test_no_match_is_error() {
        let tdir = tempfile::tempdir().unwrap();
        let pattern = tdir.path().join("*.py").to_string_lossy().into_owned();
        let err = Globs::new(vec![pattern]).files().unwrap_err();
        assert!(err.to_string().starts_with("No fixtures matched pattern"));
    }
}
