/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

#![warn(clippy::all)]
#![allow(clippy::enum_variant_names)]
#![allow(clippy::module_inception)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::single_match)]
#![allow(clippy::type_complexity)]
#![deny(clippy::cloned_instead_of_copied)]
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::str_to_string)]
#![deny(clippy::string_to_string)]
#![deny(clippy::trivially_copy_pass_by_ref)]
#![deny(clippy::derive_partial_eq_without_eq)]

mod commands;
mod config;
mod error;
mod fixture;
mod golden;
mod suppression;
mod test;
mod util;

pub use crate::commands::run;
pub use crate::config::find_config;
pub use crate::config::ConfigFile;
pub use crate::fixture::compare::CompareMode;
pub use crate::fixture::fixture::Fixture;
pub use crate::suppression::rule::RuleId;
pub use crate::suppression::suppression::Suppression;
pub use crate::suppression::suppression::SuppressionMatcher;
pub use crate::util::args::clap_env;
pub use crate::util::args::get_args_expanded;
pub use crate::util::trace::init_tracing;
