/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! The harness side of golden files: pairing them with inputs and replacing them.

pub mod pairing;
pub mod update;
