/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Filesystem wrappers that attach the offending path to every error.

use std::fs;
use std::fs::ReadDir;
use std::path::Path;

use anyhow::Context as _;

/// Fixtures are compared byte-for-byte, so reading never normalizes anything.
pub fn read_to_string(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("When reading fixture `{}`", path.display()))
}

pub fn write(path: &Path, contents: &[u8]) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("When writing fixture `{}`", path.display()))
}

pub fn read_dir(path: &Path) -> anyhow::Result<ReadDir> {
    fs::read_dir(path).with_context(|| format!("When reading directory `{}`", path.display()))
}
