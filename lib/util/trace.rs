/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Utilities for working with the `tracing` crate.

use std::io::stderr;
use std::io::IsTerminal;

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

const LOG_ENV_VAR: &str = "PYRIGHT_IGNORE_LOG";

/// Set up tracing so it prints to stderr. Fixture problems are reported at `error`,
/// progress at `info`, and per-file detail at `debug`.
pub fn init_tracing(verbose: bool, force_ansi: bool) {
    let mut env_filter = EnvFilter::from_env(LOG_ENV_VAR);
    if std::env::var_os(LOG_ENV_VAR).is_none() {
        env_filter = env_filter.add_directive(if verbose {
            LevelFilter::DEBUG.into()
        } else {
            LevelFilter::INFO.into()
        });
    }

    let layer = tracing_subscriber::fmt::layer()
        .with_line_number(false)
        .with_file(false)
        .without_time()
        .with_writer(stderr)
        .with_ansi(force_ansi || stderr().is_terminal())
        .with_target(false)
        .with_filter(env_filter);

    // Tests may initialise more than once, so ignore the "already set" failure.
    let _ = tracing_subscriber::registry().with(layer).try_init();
}
