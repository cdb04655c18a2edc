/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::clap_env;
use crate::commands::run::CommandExitStatus;
use crate::config::set_if_some;
use crate::config::ConfigFile;
use crate::error::error::print_errors;
use crate::error::error::FixtureError;
use crate::error::kind::ErrorKind;
use crate::fixture::compare::CompareMode;
use crate::fixture::fixture::Fixture;
use crate::golden::update::update_golden;
use crate::suppression::suppression::SuppressionMatcher;
use crate::util::fs_anyhow;

#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// The golden file.
    expected: PathBuf,
    /// The output actually produced for this case.
    actual: PathBuf,
    /// On mismatch, replace the golden file with the actual output instead of failing.
    #[clap(long, env = clap_env("UPDATE"))]
    update: bool,
    #[clap(long, value_enum, env = clap_env("COMPARE_MODE"))]
    compare_mode: Option<CompareMode>,
}

impl Args {
    pub fn run(self, config: ConfigFile) -> anyhow::Result<CommandExitStatus> {
        let config = config.with_overrides(|c| {
            set_if_some(&mut c.compare_mode, self.compare_mode.as_ref());
        });
        let actual = fs_anyhow::read_to_string(&self.actual)?;
        if self.update && !self.expected.is_file() {
            update_golden(&self.expected, &actual)?;
            return Ok(CommandExitStatus::Success);
        }

        let golden = Fixture::load(&self.expected, &SuppressionMatcher::new(&config.tool))?;
        match golden.first_mismatch(&actual, config.compare_mode) {
            None => {
                info!("`{}` matches its golden file", self.actual.display());
                Ok(CommandExitStatus::Success)
            }
            Some(_) if self.update => {
                update_golden(&self.expected, &actual)?;
                Ok(CommandExitStatus::Success)
            }
            Some(mismatch) => {
                print_errors(&[FixtureError::new(
                    &self.expected,
                    mismatch.line,
                    ErrorKind::GoldenMismatch,
                    format!("`{}` differs, {mismatch}", self.actual.display()),
                )]);
                Ok(CommandExitStatus::UserError)
            }
        }
    }
}
