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

use crate::fixture::compare;
use crate::fixture::compare::CompareMode;
use crate::fixture::compare::Mismatch;
use crate::fixture::header::PathHeader;
use crate::fixture::line::split_lines;
use crate::fixture::line::FixtureLine;
use crate::suppression::suppression::Suppression;
use crate::suppression::suppression::SuppressionMatcher;
use crate::util::fs_anyhow;

/// An expected-output fixture: the golden state of a Python file after the
/// quickfixer has run. Parsing never loses information, so `to_string()`
/// returns exactly the text that was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    path: PathBuf,
    header: Option<PathHeader>,
    lines: Vec<FixtureLine>,
}

impl Fixture {
    pub fn parse(path: &Path, text: &str, matcher: &SuppressionMatcher) -> Self {
        let mut lines = split_lines(text).peekable();
        let header = lines
            .peek()
            .and_then(|(body, ending)| PathHeader::detect(body, *ending));
        if header.is_some() {
            lines.next();
        }
        Self {
            path: path.to_owned(),
            header,
            lines: lines
                .map(|(body, ending)| FixtureLine::parse(body, ending, matcher))
                .collect(),
        }
    }

    pub fn load(path: &Path, matcher: &SuppressionMatcher) -> anyhow::Result<Self> {
        let text = fs_anyhow::read_to_string(path)?;
        Ok(Self::parse(path, &text, matcher))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn header(&self) -> Option<&PathHeader> {
        self.header.as_ref()
    }

    /// One-based number of the first line after the header.
    fn first_line_number(&self) -> usize {
        if self.header.is_some() { 2 } else { 1 }
    }

    /// Lines after the header, with their one-based line numbers in the file.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &FixtureLine)> {
        let first = self.first_line_number();
        self.lines.iter().enumerate().map(move |(i, l)| (i + first, l))
    }

    pub fn suppressions(&self) -> impl Iterator<Item = (usize, &FixtureLine, &Suppression)> {
        self.lines()
            .filter_map(|(n, l)| l.suppression().map(|s| (n, l, s)))
    }

    /// Whether some line, without its ending, is exactly `line`.
    pub fn contains_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l.body() == line)
    }

    /// The fixture contract: does `actual` match this golden file?
    pub fn compare(&self, actual: &str, mode: CompareMode) -> bool {
        compare::compare(&self.to_string(), actual, mode)
    }

    pub fn first_mismatch(&self, actual: &str, mode: CompareMode) -> Option<Mismatch> {
        compare::first_mismatch(&self.to_string(), actual, mode)
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(header) = &self.header {
            write!(f, "{header}")?;
        }
        for line in &self.lines {
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
