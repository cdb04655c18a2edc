/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fmt;
use std::fmt::Display;

use dupe::Dupe;

use crate::suppression::suppression::Suppression;
use crate::suppression::suppression::SuppressionMatcher;

#[derive(Debug, Clone, Copy, Dupe, PartialEq, Eq, Hash)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// The last line of a file without a trailing newline.
    None,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::None => "",
        }
    }
}

/// Split `text` into lines, keeping each line's ending so nothing is lost.
/// An empty string has no lines; a trailing newline does not start a new one.
pub fn split_lines(text: &str) -> impl Iterator<Item = (&str, LineEnding)> {
    text.split_inclusive('\n').map(|segment| {
        if let Some(body) = segment.strip_suffix("\r\n") {
            (body, LineEnding::CrLf)
        } else if let Some(body) = segment.strip_suffix('\n') {
            (body, LineEnding::Lf)
        } else {
            (segment, LineEnding::None)
        }
    })
}

/// One physical line of a fixture: the statement, an optional trailing
/// suppression comment, whatever follows the comment, and the line ending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureLine {
    code: Box<str>,
    suppression: Option<Suppression>,
    trailing: Box<str>,
    ending: LineEnding,
}

impl FixtureLine {
    pub fn parse(body: &str, ending: LineEnding, matcher: &SuppressionMatcher) -> Self {
        match matcher.find(body) {
            Some(suppression) => {
                let range = suppression.range();
                Self {
                    code: body[..range.start].into(),
                    trailing: body[range.end..].into(),
                    suppression: Some(suppression),
                    ending,
                }
            }
            None => Self {
                code: body.into(),
                suppression: None,
                trailing: "".into(),
                ending,
            },
        }
    }

    /// Everything before the suppression comment, including the gap before `#`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn statement(&self) -> &str {
        self.code.trim_end()
    }

    pub fn suppression(&self) -> Option<&Suppression> {
        self.suppression.as_ref()
    }

    pub fn trailing(&self) -> &str {
        &self.trailing
    }

    pub fn ending(&self) -> LineEnding {
        self.ending
    }

    /// Whitespace between the statement and the suppression comment.
    pub fn gap(&self) -> &str {
        &self.code[self.statement().len()..]
    }

    /// The line without its ending.
    pub fn body(&self) -> String {
        let mut res = String::with_capacity(self.code.len() + self.trailing.len() + 64);
        res.push_str(&self.code);
        if let Some(s) = &self.suppression {
            res.push_str(s.raw());
        }
        res.push_str(&self.trailing);
        res
    }
}

impl Display for FixtureLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.body(), self.ending.as_str())
    }
}
