/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::borrow::Cow;
use std::fmt;
use std::fmt::Display;

use clap::ValueEnum;
use dupe::Dupe;
use serde::Deserialize;

/// How actual output is compared with a golden file.
#[derive(Debug, Clone, Copy, Dupe, PartialEq, Eq, Hash, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CompareMode {
    /// Byte-for-byte, so whitespace and line endings matter.
    #[default]
    Exact,
    /// Treat `\r\n` and `\n` as the same line ending.
    NormalizeLineEndings,
}

impl CompareMode {
    fn normalize<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Exact => Cow::Borrowed(text),
            Self::NormalizeLineEndings if text.contains("\r\n") => {
                Cow::Owned(text.replace("\r\n", "\n"))
            }
            Self::NormalizeLineEndings => Cow::Borrowed(text),
        }
    }
}

/// The first line at which actual output departs from the golden file.
/// `None` on either side means that file ended first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn side(x: &Option<String>) -> String {
            match x {
                Some(x) => format!("{x:?}"),
                None => "end of file".to_owned(),
            }
        }
        write!(
            f,
            "line {}: expected {}, got {}",
            self.line,
            side(&self.expected),
            side(&self.actual)
        )
    }
}

pub fn compare(expected: &str, actual: &str, mode: CompareMode) -> bool {
    mode.normalize(expected) == mode.normalize(actual)
}

pub fn first_mismatch(expected: &str, actual: &str, mode: CompareMode) -> Option<Mismatch> {
    let expected = mode.normalize(expected);
    let actual = mode.normalize(actual);
    if expected == actual {
        return None;
    }
    // Lines keep their endings, so a lone `\r\n` vs `\n` difference is still found.
    let mut expected_lines = expected.split_inclusive('\n');
    let mut actual_lines = actual.split_inclusive('\n');
    let mut line = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return None,
            (e, a) if e == a => line += 1,
            (e, a) => {
                return Some(Mismatch {
                    line,
                    expected: e.map(str::to_owned),
                    actual: a.map(str::to_owned),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN: &str = "def foo():\n    return x  # pyright: ignore[reportA]\n";

    #[test]
    fn test_exact() {
        assert!(compare(GOLDEN, GOLDEN, CompareMode::Exact));
        assert!(!compare(GOLDEN, &GOLDEN.replace('\n', "\r\n"), CompareMode::Exact));
        assert!(!compare(GOLDEN, GOLDEN.trim_end(), CompareMode::Exact));
        assert!(!compare(
            GOLDEN,
            &GOLDEN.replace("x  #", "x #"),
            CompareMode::Exact
        ));
    }

    #[test]
    fn test_normalize_line_endings() {
        let crlf = GOLDEN.replace('\n', "\r\n");
        assert!(compare(GOLDEN, &crlf, CompareMode::NormalizeLineEndings));
        assert!(first_mismatch(GOLDEN, &crlf, CompareMode::NormalizeLineEndings).is_none());
        // Other whitespace still matters.
        assert!(!compare(
            GOLDEN,
            &GOLDEN.replace("    ", "  "),
            CompareMode::NormalizeLineEndings
        ));
    }

    #[test]
    fn test_first_mismatch() {
        let actual = "def foo():\n    return x  # pyright: ignore[reportB]\n";
        let m = first_mismatch(GOLDEN, actual, CompareMode::Exact).unwrap();
        assert_eq!(m.line, 2);
        assert_eq!(
            m.to_string(),
            r#"line 2: expected "    return x  # pyright: ignore[reportA]\n", got "    return x  # pyright: ignore[reportB]\n""#
        );
    }

    #[test]
    fn test_first_mismatch_length() {
        let m = first_mismatch(GOLDEN, "def foo():\n", CompareMode::Exact).unwrap();
        assert_eq!(m.line, 2);
        assert_eq!(m.actual, None);

        let longer = format!("{GOLDEN}\n");
        let m = first_mismatch(GOLDEN, &longer, CompareMode::Exact).unwrap();
        assert_eq!(m.line, 3);
        assert_eq!(m.expected, None);
        assert_eq!(m.actual.as_deref(), Some("\n"));
        assert!(m.to_string().contains("expected end of file"));
    }

    #[test]
    fn test_first_mismatch_line_ending_only() {
        let m = first_mismatch("a\nb\n", "a\r\nb\n", CompareMode::Exact).unwrap();
        assert_eq!(m.line, 1);
    }
}
