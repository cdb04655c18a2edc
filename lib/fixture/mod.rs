/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Expected-output fixtures: golden Python files carrying suppression comments.

pub mod compare;
pub mod fixture;
pub mod header;
pub mod line;
pub mod validate;
