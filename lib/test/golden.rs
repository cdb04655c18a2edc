/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Whole-harness tests over fixture directories on disk.

use std::fs;

use crate::commands::run::CommandExitStatus;
use crate::config::ConfigFile;
use crate::error::kind::ErrorKind;
use crate::fixture::fixture::Fixture;
use crate::fixture::validate::validate;
use crate::fixture::validate::ValidationOptions;
use crate::golden::pairing::Pairing;
use crate::golden::update::update_golden;
use crate::run::Command;
use crate::suppression::suppression::SuppressionMatcher;
use crate::test::util::expected_dir;
use crate::test::util::test_init_tracing;
use crate::util::globs::Globs;
use crate::util::listing::FileList;

#[test]
fn test_shipped_directory_is_clean() {
    test_init_tracing();
    let files = Globs::new(vec![expected_dir().to_string_lossy().into_owned()])
        .files()
        .unwrap();
    assert_eq!(files.len(), 2);
    let matcher = SuppressionMatcher::new("pyright");
    for path in files {
        let fixture = Fixture::load(&path, &matcher).unwrap();
        assert!(
            validate(&fixture, &ValidationOptions::default()).is_empty(),
            "{}",
            path.display()
        );
    }
}

#[test]
fn test_shipped_fixtures_pair_by_name() {
    let dir = expected_dir();
    let pairing = Pairing::discover(&dir, dir.parent().unwrap(), "_quickfixed").unwrap();
    assert!(pairing.unpaired.is_empty());
    assert_eq!(
        pairing.pairs.iter().map(|p| p.case.as_str()).collect::<Vec<_>>(),
        vec!["multipleIssuesOneIgnoreComments", "oneIssueNoIgnoreComment"]
    );
}

#[test]
fn test_update_then_compare() {
    test_init_tracing();
    let tdir = tempfile::tempdir().unwrap();
    let golden = tdir.path().join("case_quickfixed.py");
    let actual = "def f(x):\n    return x.a  # pyright: ignore[reportUnknownMemberType]\n";

    update_golden(&golden, actual).unwrap();
    let fixture = Fixture::load(&golden, &SuppressionMatcher::new("pyright")).unwrap();
    assert!(fixture.compare(actual, ConfigFile::default().compare_mode));
}

#[test]
fn test_check_command_over_directory() {
    test_init_tracing();
    let tdir = tempfile::tempdir().unwrap();
    let expected = tdir.path().join("test/expected");
    fs::create_dir_all(&expected).unwrap();
    fs::write(tdir.path().join("test/ok.py"), "x = 1\n").unwrap();
    fs::write(
        expected.join("ok_quickfixed.py"),
        "x = 1  # pyright: ignore[reportUnknownVariableType]\n",
    )
    .unwrap();

    let config = ConfigFile::default().with_overrides(|c| c.root = tdir.path().to_owned());
    let command = <Command as clap::Subcommand>::augment_subcommands(clap::Command::new("t"))
        .try_get_matches_from(["t", "check", "--check-pairs", "-j", "1"])
        .and_then(|m| <Command as clap::FromArgMatches>::from_arg_matches(&m))
        .unwrap();
    assert_eq!(command.run(config).unwrap(), CommandExitStatus::Success);

    // An expected file with no input is a problem once pairs are checked.
    fs::write(
        expected.join("orphan_quickfixed.py"),
        "x = 1  # pyright: ignore[reportUnknownVariableType]\n",
    )
    .unwrap();
    let pairing = Pairing::discover(&expected, &tdir.path().join("test"), "_quickfixed").unwrap();
    let kinds: Vec<ErrorKind> = pairing
        .errors("_quickfixed")
        .iter()
        .map(|e| e.error_kind())
        .collect();
    assert_eq!(kinds, vec![ErrorKind::MissingInput]);
}
