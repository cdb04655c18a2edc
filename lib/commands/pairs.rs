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
use crate::golden::pairing::Pairing;
use crate::util::display::count;

#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// Directory holding the expected fixtures, overriding the config.
    #[clap(long, env = clap_env("EXPECTED_DIR"))]
    expected_dir: Option<PathBuf>,
    /// Directory holding the input fixtures, overriding the config.
    #[clap(long, env = clap_env("INPUT_DIR"))]
    input_dir: Option<PathBuf>,
    /// Suffix distinguishing an expected file name from its input's.
    #[clap(long, env = clap_env("EXPECTED_SUFFIX"))]
    expected_suffix: Option<String>,
}

impl Args {
    /// Prints `case<TAB>input<TAB>expected` per pair on stdout.
    pub fn run(self, config: ConfigFile) -> anyhow::Result<CommandExitStatus> {
        let config = config.with_overrides(|c| {
            set_if_some(&mut c.expected_dir, self.expected_dir.as_ref());
            set_if_some(&mut c.input_dir, self.input_dir.as_ref());
            set_if_some(&mut c.expected_suffix, self.expected_suffix.as_ref());
        });
        let pairing = Pairing::discover(
            &config.expected_dir(),
            &config.input_dir(),
            &config.expected_suffix,
        )?;
        for pair in &pairing.pairs {
            println!(
                "{}\t{}\t{}",
                pair.case,
                pair.input.display(),
                pair.expected.display()
            );
        }
        let errors = pairing.errors(&config.expected_suffix);
        print_errors(&errors);
        info!(
            "Found {}, {}",
            count(pairing.pairs.len(), "pair"),
            count(errors.len(), "problem")
        );
        Ok(CommandExitStatus::from_problems(errors.len()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use dupe::Dupe;

    use super::*;

    #[test]
    fn test_pairs_command() {
        let tdir = tempfile::tempdir().unwrap();
        let expected_dir = tdir.path().join("test/expected");
        fs::create_dir_all(&expected_dir).unwrap();
        fs::write(tdir.path().join("test/a.py"), "").unwrap();
        fs::write(expected_dir.join("a_quickfixed.py"), "").unwrap();

        let config = ConfigFile::default().with_overrides(|c| c.root = tdir.path().to_owned());
        let args = Args::try_parse_from(["pairs"]).unwrap();
        assert_eq!(args.run(config.dupe()).unwrap(), CommandExitStatus::Success);

        fs::write(expected_dir.join("b_quickfixed.py"), "").unwrap();
        let args = Args::try_parse_from(["pairs"]).unwrap();
        assert_eq!(args.run(config).unwrap(), CommandExitStatus::UserError);
    }
}
