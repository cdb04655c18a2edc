/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A diagnostic rule identifier such as `reportUnknownVariableType`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(Box<str>);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleIdError {
    #[error("empty rule identifier")]
    Empty,
    #[error("`{0}` is not a rule identifier (expected `report` followed by letters)")]
    BadName(String),
}

fn is_rule_id(name: &str) -> bool {
    static RULE_ID_REGEX: LazyLock<Regex> =
        LazyLock::new(|| Regex::new("^report[A-Za-z]+$").unwrap());
    RULE_ID_REGEX.is_match(name)
}

/// Alphabetical order of rule names, ignoring case first and falling back to
/// byte order to break ties.
pub fn compare_rule_names(a: &str, b: &str) -> Ordering {
    a.to_ascii_lowercase()
        .cmp(&b.to_ascii_lowercase())
        .then_with(|| a.cmp(b))
}

impl FromStr for RuleId {
    type Err = RuleIdError;

    fn from_str(s: &str) -> Result<Self, RuleIdError> {
        if s.is_empty() {
            Err(RuleIdError::Empty)
        } else if is_rule_id(s) {
            Ok(Self(s.into()))
        } else {
            Err(RuleIdError::BadName(s.to_owned()))
        }
    }
}

impl Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl RuleId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn cmp_alphabetical(&self, other: &Self) -> Ordering {
        compare_rule_names(&self.0, &other.0)
    }
}
