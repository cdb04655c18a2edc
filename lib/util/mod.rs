/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Utility functions that are not specific to suppression fixtures.

pub mod args;
pub mod display;
pub mod fs_anyhow;
pub mod fs_upward_search;
pub mod globs;
pub mod listing;
pub mod prelude;
pub mod rayon;
pub mod trace;
