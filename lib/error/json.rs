/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use serde::Serialize;

use crate::error::error::FixtureError;
use crate::util::prelude::SliceExt;

/// Serialized form of a [`FixtureError`], for `--output-format json`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JsonError {
    path: String,
    line: usize,
    /// The kebab-case name of the error kind.
    name: String,
    description: String,
}

impl JsonError {
    pub fn from_error(error: &FixtureError) -> Self {
        Self {
            path: error.path().to_string_lossy().into_owned(),
            line: error.line(),
            name: error.error_kind().to_name(),
            description: error.msg().to_owned(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct JsonErrors {
    pub errors: Vec<JsonError>,
}

impl JsonErrors {
    pub fn from_errors(errors: &[FixtureError]) -> Self {
        Self {
            errors: errors.map(JsonError::from_error),
        }
    }
}
