/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use clap::Subcommand;

pub use crate::commands::check::Args as CheckArgs;
pub use crate::commands::compare::Args as CompareArgs;
pub use crate::commands::pairs::Args as PairsArgs;
use crate::config::ConfigFile;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check that expected fixtures carry well-formed suppression comments
    Check(CheckArgs),

    /// Compare actual quickfix output with its golden file
    Compare(CompareArgs),

    /// List expected fixtures together with the input files they pair with
    Pairs(PairsArgs),
}

impl Command {
    pub fn run(self, config: ConfigFile) -> anyhow::Result<CommandExitStatus> {
        match self {
            Self::Check(args) => args.run(config),
            Self::Compare(args) => args.run(config),
            Self::Pairs(args) => args.run(config),
        }
    }
}

/// Exit status of a command, if the run is completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandExitStatus {
    /// The command completed without an issue.
    Success,
    /// The command completed, but problems (e.g. malformed fixtures) were found.
    UserError,
}

impl CommandExitStatus {
    pub fn from_problems(count: usize) -> Self {
        if count == 0 {
            Self::Success
        } else {
            Self::UserError
        }
    }
}
