/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::ffi::OsString;

use anyhow::Context as _;
use argfile::Argument;

/// Every CLI flag can also be set through an environment variable with this prefix,
/// e.g. `--output-format` becomes `PYRIGHT_IGNORE_OUTPUT_FORMAT`.
pub static ENV_VAR_OVERRIDE_PREFIX: &str = "PYRIGHT_IGNORE_";

/// Expand `@file` arguments, so long fixture lists can be kept in a file.
pub fn get_args_expanded(args: impl Iterator<Item = OsString>) -> anyhow::Result<Vec<OsString>> {
    // Blank lines in an argument file are not arguments.
    fn parse_file_skipping_blanks(content: &str, prefix: char) -> Vec<Argument> {
        let mut res = argfile::parse_fromfile(content, prefix);
        res.retain(|x| match x {
            Argument::PassThrough(arg) => !arg.is_empty(),
            _ => true,
        });
        res
    }

    argfile::expand_args_from(args, parse_file_skipping_blanks, argfile::PREFIX)
        .context("When parsing @arg files")
}

pub fn clap_env(suffix: &str) -> String {
    ENV_VAR_OVERRIDE_PREFIX.to_owned() + suffix
}
