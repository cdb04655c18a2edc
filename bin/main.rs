/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::backtrace::Backtrace;
use std::env::args_os;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use pyright_ignore::clap_env;
use pyright_ignore::find_config;
use pyright_ignore::get_args_expanded;
use pyright_ignore::init_tracing;
use pyright_ignore::run::Command;
use pyright_ignore::run::CommandExitStatus;

#[derive(Debug, Parser)]
#[command(name = "pyright_ignore")]
#[command(about = "Check golden fixtures carrying `pyright: ignore[...]` suppressions", long_about = None)]
struct Args {
    /// Enable verbose logging.
    #[clap(long = "verbose", short = 'v', global = true, env = clap_env("VERBOSE"))]
    verbose: bool,

    /// Use this config file instead of searching upward for `pyright_ignore.toml`.
    #[clap(long = "config-file", global = true, env = clap_env("CONFIG_FILE"))]
    config_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

fn exit_on_panic() {
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("Thread panicked, shutting down: {}", info);
        eprintln!("Backtrace:\n{}", Backtrace::force_capture());
        std::process::exit(1);
    }));
}

fn to_exit_code(status: CommandExitStatus) -> ExitCode {
    match status {
        CommandExitStatus::Success => ExitCode::SUCCESS,
        CommandExitStatus::UserError => ExitCode::FAILURE,
    }
}

/// Run based on the command line arguments.
fn run() -> anyhow::Result<ExitCode> {
    let args = Args::parse_from(get_args_expanded(args_os())?);
    init_tracing(args.verbose, false);
    let cwd = std::env::current_dir().context("When getting the current directory")?;
    let config = find_config(args.config_file.as_deref(), &cwd)?;
    args.command.run(config).map(to_exit_code)
}

pub fn main() -> ExitCode {
    exit_on_panic();
    match run() {
        Ok(code) => code,
        Err(e) => {
            // Returning a Result from main would print a backtrace under RUST_BACKTRACE=1.
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
