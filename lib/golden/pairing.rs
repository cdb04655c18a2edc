/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context as _;

use crate::error::error::FixtureError;
use crate::error::kind::ErrorKind;
use crate::util::fs_anyhow;

/// An expected fixture and the input file it is the quickfixed version of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePair {
    pub case: String,
    pub input: PathBuf,
    pub expected: PathBuf,
}

/// `foo_quickfixed.py` with suffix `_quickfixed` is case `foo`.
pub fn case_name(expected: &Path, suffix: &str) -> Option<String> {
    let stem = expected.file_stem()?.to_str()?;
    let case = stem.strip_suffix(suffix)?;
    if case.is_empty() {
        None
    } else {
        Some(case.to_owned())
    }
}

/// The input file paired with `expected`: `<input_dir>/<case>.<ext>`, keeping the extension.
pub fn input_for(expected: &Path, input_dir: &Path, suffix: &str) -> Option<FixturePair> {
    let case = case_name(expected, suffix)?;
    let ext = expected.extension().and_then(|e| e.to_str()).unwrap_or("py");
    let input = input_dir.join(format!("{case}.{ext}"));
    Some(FixturePair {
        case,
        input,
        expected: expected.to_owned(),
    })
}

#[derive(Debug, Default)]
pub struct Pairing {
    pub pairs: Vec<FixturePair>,
    /// Python files in the expected directory that do not carry the suffix.
    pub unpaired: Vec<PathBuf>,
}

impl Pairing {
    /// Pair every Python file directly inside `expected_dir` with its input.
    pub fn discover(expected_dir: &Path, input_dir: &Path, suffix: &str) -> anyhow::Result<Self> {
        let mut files = Vec::new();
        for entry in fs_anyhow::read_dir(expected_dir)? {
            let entry = entry.with_context(|| {
                format!("When iterating over directory `{}`", expected_dir.display())
            })?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|e| e == "py" || e == "pyi") {
                files.push(path);
            }
        }
        files.sort();
        let mut res = Self::default();
        for path in files {
            match input_for(&path, input_dir, suffix) {
                Some(pair) => res.pairs.push(pair),
                None => res.unpaired.push(path),
            }
        }
        Ok(res)
    }

    /// Unpaired fixtures and pairs whose input file is missing.
    pub fn errors(&self, suffix: &str) -> Vec<FixtureError> {
        let mut errors = Vec::new();
        for path in &self.unpaired {
            errors.push(FixtureError::new(
                path,
                1,
                ErrorKind::UnpairedFixture,
                format!("Expected fixture name does not end in `{suffix}`"),
            ));
        }
        for pair in &self.pairs {
            if !pair.input.is_file() {
                errors.push(FixtureError::new(
                    &pair.expected,
                    1,
                    ErrorKind::MissingInput,
                    format!("No input file `{}`", pair.input.display()),
                ));
            }
        }
        errors
    }
}
