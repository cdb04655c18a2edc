/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Utilities for formatting output.

use std::fmt;
use std::fmt::Display;

pub fn commas_iter<F, A>(a: F) -> impl Display
where
    F: Fn() -> A,
    A: IntoIterator<Item: Display>,
{
    struct Commas<F>(F);
    impl<F, A> Display for Commas<F>
    where
        F: Fn() -> A,
        A: IntoIterator<Item: Display>,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (i, item) in (self.0)().into_iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                Display::fmt(&item, f)?;
            }
            Ok(())
        }
    }
    Commas(a)
}

/// Format a count with `,` thousands separators.
pub fn number_thousands(x: usize) -> impl Display {
    let digits = x.to_string();
    let mut res = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            res.push(',');
        }
        res.push(c);
    }
    res
}

/// `1 fixture` / `2 fixtures`.
pub fn count(n: usize, noun: &str) -> String {
    format!(
        "{} {noun}{}",
        number_thousands(n),
        if n == 1 { "" } else { "s" }
    )
}
