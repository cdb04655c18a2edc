/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Well-formedness checks for expected fixtures.

use crate::config::ConfigFile;
use crate::config::HeaderPolicy;
use crate::config::RuleOrder;
use crate::error::error::FixtureError;
use crate::error::kind::ErrorKind;
use crate::fixture::fixture::Fixture;
use crate::fixture::line::FixtureLine;
use crate::suppression::rule::RuleId;
use crate::suppression::suppression::Suppression;
use crate::util::display::commas_iter;

/// The PEP 8 inline comment gap, which the quickfixer emits.
const COMMENT_GAP: &str = "  ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    pub header: HeaderPolicy,
    pub rule_order: RuleOrder,
    pub strict_spacing: bool,
}

impl ValidationOptions {
    pub fn from_config(config: &ConfigFile) -> Self {
        Self {
            header: config.header,
            rule_order: config.rule_order,
            strict_spacing: config.strict_spacing,
        }
    }
}

struct Validator<'a> {
    fixture: &'a Fixture,
    options: &'a ValidationOptions,
    errors: Vec<FixtureError>,
}

impl<'a> Validator<'a> {
    fn add(&mut self, line: usize, kind: ErrorKind, msg: String) {
        self.errors
            .push(FixtureError::new(self.fixture.path(), line, kind, msg));
    }

    fn check_header(&mut self) {
        let fixture = self.fixture;
        match (fixture.header(), self.options.header) {
            (None, HeaderPolicy::Required) => self.add(
                1,
                ErrorKind::MissingHeader,
                "Fixture does not start with a `# <path>` header".to_owned(),
            ),
            (Some(header), HeaderPolicy::Forbidden) => self.add(
                1,
                ErrorKind::UnexpectedHeader,
                format!("Unexpected path header `{}`", header.path().display()),
            ),
            _ => {}
        }
        if let Some(header) = fixture.header() {
            if !header.names(fixture.path()) {
                self.add(
                    1,
                    ErrorKind::HeaderPathMismatch,
                    format!(
                        "Header names `{}`, but the fixture is `{}`",
                        header.path().display(),
                        fixture.path().display()
                    ),
                );
            }
        }
    }

    fn check_rules(&mut self, line_no: usize, suppression: &Suppression) {
        if suppression.is_empty() {
            self.add(
                line_no,
                ErrorKind::EmptyRuleList,
                format!("`{}` suppresses no rules", suppression.raw()),
            );
            return;
        }
        for code in suppression.codes() {
            if let Err(e) = code.parse::<RuleId>() {
                self.add(
                    line_no,
                    ErrorKind::InvalidRuleId,
                    format!("In `{}`: {e}", suppression.raw()),
                );
            }
        }
        for dup in suppression.duplicates() {
            self.add(
                line_no,
                ErrorKind::DuplicateRuleId,
                format!("`{dup}` appears more than once"),
            );
        }
        if self.options.rule_order == RuleOrder::Alphabetical && !suppression.is_sorted() {
            // Order is only meaningful once every entry is a rule identifier.
            if let Ok(ids) = suppression.rule_ids() {
                let mut sorted = ids.into_vec();
                sorted.sort_by(RuleId::cmp_alphabetical);
                self.add(
                    line_no,
                    ErrorKind::UnsortedRuleIds,
                    format!(
                        "Rules are not sorted, expected `{}`",
                        commas_iter(|| sorted.iter())
                    ),
                );
            }
        }
    }

    fn check_spacing(&mut self, line_no: usize, line: &FixtureLine, suppression: &Suppression) {
        if !suppression.is_canonical() {
            self.add(
                line_no,
                ErrorKind::NonCanonicalSpacing,
                format!(
                    "Expected `{}`, got `{}`",
                    suppression.canonical(),
                    suppression.raw()
                ),
            );
        }
        // A suppression on a line of its own has no statement to be separated from.
        if !line.statement().is_empty() && line.gap() != COMMENT_GAP {
            self.add(
                line_no,
                ErrorKind::MissingTwoSpaceGap,
                format!(
                    "Suppression should be separated from the statement by two spaces, got {:?}",
                    line.gap()
                ),
            );
        }
    }

    fn run(mut self) -> Vec<FixtureError> {
        self.check_header();
        let fixture = self.fixture;
        for (line_no, line, suppression) in fixture.suppressions() {
            self.check_rules(line_no, suppression);
            if self.options.strict_spacing {
                self.check_spacing(line_no, line, suppression);
            }
        }
        self.errors
    }
}

/// All well-formedness problems in `fixture`, in line order.
pub fn validate(fixture: &Fixture, options: &ValidationOptions) -> Vec<FixtureError> {
    Validator {
        fixture,
        options,
        errors: Vec::new(),
    }
    .run()
}
