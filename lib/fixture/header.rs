/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;

use crate::fixture::line::LineEnding;

/// A first line of the form `# test/expected/foo_quickfixed.py`, echoing the fixture's own path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathHeader {
    path: PathBuf,
    body: Box<str>,
    ending: LineEnding,
}

impl PathHeader {
    /// Recognise a header: a comment whose only content is a single
    /// whitespace-free word ending in `.py` or `.pyi`.
    pub fn detect(body: &str, ending: LineEnding) -> Option<Self> {
        let rest = body.strip_prefix('#')?.trim();
        if rest.is_empty() || rest.contains(char::is_whitespace) {
            return None;
        }
        let path = PathBuf::from(rest);
        if !path
            .extension()
            .is_some_and(|e| e == "py" || e == "pyi")
        {
            return None;
        }
        Some(Self {
            path,
            body: body.into(),
            ending,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Whether the header plausibly names `fixture_path`. Either may be the longer,
    /// depending on where the harness was run from.
    pub fn names(&self, fixture_path: &Path) -> bool {
        fixture_path.ends_with(&self.path) || self.path.ends_with(fixture_path)
    }
}

impl Display for PathHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.body, self.ending.as_str())
    }
}
