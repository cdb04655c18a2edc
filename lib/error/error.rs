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

use starlark_map::small_map::SmallMap;

use crate::error::kind::ErrorKind;
use crate::util::display::number_thousands;

/// A problem found in a fixture. Line numbers are one-based; file-level problems use line 1.
#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct FixtureError {
    path: PathBuf,
    line: usize,
    error_kind: ErrorKind,
    msg: Box<str>,
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}]",
            self.path.display(),
            self.line,
            self.msg,
            self.error_kind.to_name()
        )
    }
}

pub fn print_errors(errors: &[FixtureError]) {
    for err in errors {
        tracing::error!("{err}");
    }
}

fn count_error_kinds(errors: &[FixtureError]) -> Vec<(ErrorKind, usize)> {
    let mut map = SmallMap::new();
    for err in errors {
        *map.entry(err.error_kind()).or_default() += 1;
    }
    let mut res = map.into_iter().collect::<Vec<_>>();
    res.sort_by_key(|x| x.1);
    res
}

/// Print the `limit` most common kinds, most common last.
pub fn print_error_counts(errors: &[FixtureError], limit: usize) {
    let items = count_error_kinds(errors);
    for (kind, count) in items.iter().rev().take(limit).rev() {
        eprintln!("{} instances of {}", number_thousands(*count), kind.to_name());
    }
}

impl FixtureError {
    pub fn new(path: &Path, line: usize, error_kind: ErrorKind, msg: String) -> Self {
        Self {
            path: path.to_owned(),
            line,
            error_kind,
            msg: msg.into_boxed_str(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn error_kind(&self) -> ErrorKind {
        self.error_kind
    }
}
