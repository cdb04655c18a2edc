/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::path::Path;
use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use pretty_assertions::assert_str_eq;

use crate::fixture::fixture::Fixture;
use crate::fixture::validate::validate;
use crate::fixture::validate::ValidationOptions;
use crate::suppression::suppression::SuppressionMatcher;
use crate::util::trace::init_tracing;

/// Declare a test that parses `$contents` as the fixture at `$path`, checks it
/// round-trips byte for byte, and expects exactly the listed problem kinds.
#[macro_export]
macro_rules! fixture_testcase {
    ($name:ident, $path:literal, $contents:literal, [$($kind:literal),* $(,)?],) => {
        #[test]
        fn $name() {
            $crate::test::util::fixture_testcase_for_macro(
                $path,
                $contents,
                &$crate::fixture::validate::ValidationOptions::default(),
                &[$($kind),*],
            )
        }
    };
    ($name:ident, $options:expr, $path:literal, $contents:literal, [$($kind:literal),* $(,)?],) => {
        #[test]
        fn $name() {
            $crate::test::util::fixture_testcase_for_macro(
                $path,
                $contents,
                &$options,
                &[$($kind),*],
            )
        }
    };
}

pub fn test_init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| init_tracing(true, false));
}

pub fn parse_fixture(path: &str, contents: &str) -> Fixture {
    Fixture::parse(Path::new(path), contents, &SuppressionMatcher::new("pyright"))
}

pub fn fixture_testcase_for_macro(
    path: &str,
    contents: &str,
    options: &ValidationOptions,
    expected_kinds: &[&str],
) {
    test_init_tracing();
    let fixture = parse_fixture(path, contents);
    assert_str_eq!(fixture.to_string(), contents, "round trip of {path}");
    let got: Vec<String> = validate(&fixture, options)
        .iter()
        .map(|e| e.error_kind().to_name())
        .collect();
    assert_eq!(got, expected_kinds, "problems in {path}");
}

/// The directory holding the golden fixtures shipped with this crate.
pub fn expected_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("test/expected")
}
