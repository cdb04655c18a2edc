/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use clap::Parser;

use crate::clap_env;
use crate::util::rayon::init_rayon;

#[derive(Debug, Parser, Clone)]
pub struct CommonArgs {
    /// Number of threads to check fixtures on. 0 means one per core.
    #[clap(long, short = 'j', default_value = "0", env = clap_env("THREADS"))]
    threads: usize,
}

impl CommonArgs {
    /// Sets up the global thread pool. Only the first call has any effect.
    pub fn init_parallelism(&self) {
        init_rayon(if self.threads == 0 {
            None
        } else {
            Some(self.threads)
        });
    }
}
