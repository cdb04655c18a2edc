/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use convert_case::Case;
use convert_case::Casing;
use parse_display::Display;

/// Everything that can be wrong with a fixture or a fixture pair.
#[derive(Debug, Clone, PartialOrd, Ord, PartialEq, Eq, Hash, Copy, Display)]
pub enum ErrorKind {
    /// `ignore[]` with nothing (or only blanks) inside the brackets.
    EmptyRuleList,
    /// An entry that is not `report` followed by letters.
    InvalidRuleId,
    /// The same rule named twice in one bracket list.
    DuplicateRuleId,
    /// Rules not in alphabetical order, when that is required.
    UnsortedRuleIds,
    /// The comment is not spelled `# <tool>: ignore[a, b]`.
    NonCanonicalSpacing,
    /// The comment is not separated from its statement by exactly two spaces.
    MissingTwoSpaceGap,
    /// The first line does not echo the fixture path, when that is required.
    MissingHeader,
    /// A path header is present, when headers are forbidden.
    UnexpectedHeader,
    /// The path header names some other file.
    HeaderPathMismatch,
    /// An expected file whose name lacks the configured suffix.
    UnpairedFixture,
    /// An expected file whose input file does not exist.
    MissingInput,
    /// Actual output differs from the golden file.
    GoldenMismatch,
}

impl ErrorKind {
    pub fn to_name(self) -> String {
        self.to_string().to_case(Case::Kebab)
    }
}
