/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::path::Path;
use std::path::PathBuf;

/// Walk `start_dir` and its ancestors, returning the first existing file named `name`.
/// The search stops after `stop_after` if given, so tests can stay inside a temp dir.
fn first_match_inner(start_dir: &Path, name: &str, stop_after: Option<&Path>) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if stop_after == Some(dir) {
            break;
        }
    }
    None
}

/// Search upward from `start_dir` for a file called `name`.
/// The caller is responsible for passing a meaningful (ideally absolute) directory.
pub fn first_match(start_dir: &Path, name: &str) -> Option<PathBuf> {
    first_match_inner(start_dir, name, None)
}
