/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The golden fixtures shipped in `test/expected`.

use std::path::Path;

use crate::config::HeaderPolicy;
use crate::fixture::compare::CompareMode;
use crate::fixture::validate::validate;
use crate::fixture::validate::ValidationOptions;
use crate::test::util::parse_fixture;

const MULTIPLE_ISSUES_PATH: &str = "test/expected/multipleIssuesOneIgnoreComments_quickfixed.py";
const MULTIPLE_ISSUES: &str =
    include_str!("../../test/expected/multipleIssuesOneIgnoreComments_quickfixed.py");

const ONE_ISSUE_PATH: &str = "test/expected/oneIssueNoIgnoreComment_quickfixed.py";
const ONE_ISSUE: &str = include_str!("../../test/expected/oneIssueNoIgnoreComment_quickfixed.py");

fn strict() -> ValidationOptions {
    ValidationOptions {
        strict_spacing: true,
        ..Default::default()
    }
}

#[test]
fn test_multiple_issues_literal_line() {
    let fixture = parse_fixture(MULTIPLE_ISSUES_PATH, MULTIPLE_ISSUES);
    assert!(fixture.contains_line(
        "    return x.unknown_type_attribute, unknown_type_var  # pyright: ignore[reportUnknownMemberType, reportUnknownVariableType]"
    ));
    let (_, line, suppression) = fixture.suppressions().next().unwrap();
    assert_eq!(
        line.statement(),
        "    return x.unknown_type_attribute, unknown_type_var"
    );
    assert_eq!(
        suppression
            .rule_ids()
            .unwrap()
            .iter()
            .map(|r| r.as_str())
            .collect::<Vec<_>>(),
        vec!["reportUnknownMemberType", "reportUnknownVariableType"]
    );
}

#[test]
fn test_one_issue_literal_line_and_header() {
    assert!(ONE_ISSUE.starts_with("# test/expected/oneIssueNoIgnoreComment_quickfixed.py"));
    let fixture = parse_fixture(ONE_ISSUE_PATH, ONE_ISSUE);
    assert_eq!(fixture.header().unwrap().path(), Path::new(ONE_ISSUE_PATH));
    assert!(fixture.contains_line(
        "    return x.some_attribute, some_var  # pyright: ignore[reportUnknownVariableType]"
    ));
}

#[test]
fn test_header_is_inconsistent_across_fixtures() {
    assert!(parse_fixture(MULTIPLE_ISSUES_PATH, MULTIPLE_ISSUES)
        .header()
        .is_none());
    assert!(parse_fixture(ONE_ISSUE_PATH, ONE_ISSUE).header().is_some());
}

#[test]
fn test_shipped_fixtures_are_well_formed() {
    for (path, text) in [
        (MULTIPLE_ISSUES_PATH, MULTIPLE_ISSUES),
        (ONE_ISSUE_PATH, ONE_ISSUE),
    ] {
        let fixture = parse_fixture(path, text);
        assert_eq!(fixture.suppressions().count(), 1, "{path}");
        assert!(validate(&fixture, &strict()).is_empty(), "{path}");
    }
}

#[test]
fn test_header_policies_on_shipped_fixtures() {
    let required = ValidationOptions {
        header: HeaderPolicy::Required,
        ..Default::default()
    };
    assert_eq!(
        validate(&parse_fixture(MULTIPLE_ISSUES_PATH, MULTIPLE_ISSUES), &required).len(),
        1
    );
    assert!(validate(&parse_fixture(ONE_ISSUE_PATH, ONE_ISSUE), &required).is_empty());
}

#[test]
fn test_shipped_fixtures_round_trip() {
    for (path, text) in [
        (MULTIPLE_ISSUES_PATH, MULTIPLE_ISSUES),
        (ONE_ISSUE_PATH, ONE_ISSUE),
    ] {
        assert_eq!(parse_fixture(path, text).to_string(), text, "{path}");
    }
}

#[test]
fn test_compare_against_shipped_fixture() {
    let fixture = parse_fixture(ONE_ISSUE_PATH, ONE_ISSUE);
    assert!(fixture.compare(ONE_ISSUE, CompareMode::Exact));

    // The quickfixer must emit the comment with the two-space gap.
    let one_space = ONE_ISSUE.replace("some_var  #", "some_var #");
    assert!(!fixture.compare(&one_space, CompareMode::Exact));
    assert_eq!(
        fixture
            .first_mismatch(&one_space, CompareMode::Exact)
            .unwrap()
            .line,
        10
    );

    let crlf = ONE_ISSUE.replace('\n', "\r\n");
    assert!(!fixture.compare(&crlf, CompareMode::Exact));
    assert!(fixture.compare(&crlf, CompareMode::NormalizeLineEndings));
}
