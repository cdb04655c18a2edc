/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::path::PathBuf;

/// A source of fixture files to validate.
pub trait FileList {
    /// Returns the fixture files, deduplicated, in a stable order.
    fn files(&self) -> anyhow::Result<Vec<PathBuf>>;
}

