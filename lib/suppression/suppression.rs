/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::cmp::Ordering;
use std::ops::Range;

use regex::Regex;
use starlark_map::small_set::SmallSet;
use vec1::Vec1;

use crate::suppression::rule::compare_rule_names;
use crate::suppression::rule::RuleId;
use crate::suppression::rule::RuleIdError;
use crate::util::display::commas_iter;

/// A trailing `# <tool>: ignore[<rule>, ...]` comment, as it appears on one line.
///
/// The rule list is kept as written (trimmed, possibly empty or malformed) so that
/// validation can report exactly what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    tool: Box<str>,
    codes: Vec<Box<str>>,
    /// Byte range of the comment within its line, from `#` to `]` inclusive.
    range: Range<usize>,
    raw: Box<str>,
}

/// Finds suppression comments for one tool. The tool name matches case-insensitively.
#[derive(Debug, Clone)]
pub struct SuppressionMatcher {
    regex: Regex,
}

impl SuppressionMatcher {
    pub fn new(tool: &str) -> Self {
        let pattern = format!(
            r"(?i)#\s*(?P<tool>{}):\s*ignore\[(?P<codes>.*?)\]",
            regex::escape(tool)
        );
        // The tool name is escaped, so the pattern is always valid.
        Self {
            regex: Regex::new(&pattern).unwrap(),
        }
    }

    /// The first suppression comment on `line`, if any. Any later comment on the
    /// same line is left as ordinary trailing text.
    pub fn find(&self, line: &str) -> Option<Suppression> {
        let captures = self.regex.captures(line)?;
        let whole = captures.get(0)?;
        let codes = captures.name("codes").map_or("", |m| m.as_str());
        let codes = if codes.trim().is_empty() {
            Vec::new()
        } else {
            codes.split(',').map(|c| c.trim().into()).collect()
        };
        Some(Suppression {
            tool: captures.name("tool").map_or("", |m| m.as_str()).into(),
            codes,
            range: whole.range(),
            raw: whole.as_str().into(),
        })
    }
}

impl Suppression {
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// The bracketed entries, trimmed. Blank entries (from `a,,b`) are kept.
    pub fn codes(&self) -> &[Box<str>] {
        &self.codes
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True if the brackets hold no rule names, only blanks and commas.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_empty())
    }

    /// The validated rule list. Fails on the first entry that is not a rule identifier,
    /// or with [`RuleIdError::Empty`] if there are no entries at all.
    pub fn rule_ids(&self) -> Result<Vec1<RuleId>, RuleIdError> {
        let ids = self
            .codes
            .iter()
            .map(|c| c.parse::<RuleId>())
            .collect::<Result<Vec<_>, _>>()?;
        Vec1::try_from_vec(ids).map_err(|_| RuleIdError::Empty)
    }

    /// Non-blank entries that occur more than once, each reported once, in
    /// first-repeat order.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = SmallSet::new();
        let mut dups = SmallSet::new();
        for code in self.codes.iter().filter(|c| !c.is_empty()) {
            if !seen.insert(&**code) {
                dups.insert(&**code);
            }
        }
        dups.into_iter().collect()
    }

    /// Whether the entries are in alphabetical order, ignoring case.
    pub fn is_sorted(&self) -> bool {
        self.codes
            .windows(2)
            .all(|w| compare_rule_names(&w[0], &w[1]) != Ordering::Greater)
    }

    /// `# <tool>: ignore[a, b]`, with the tool spelled as written.
    pub fn canonical(&self) -> String {
        format!(
            "# {}: ignore[{}]",
            self.tool,
            commas_iter(|| self.codes.iter())
        )
    }

    pub fn is_canonical(&self) -> bool {
        *self.raw == self.canonical()
    }
}
