/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

//! Utilities for creating the thread pool fixtures are checked on.

use tracing::debug;

/// Set up the global thread pool. `None` means one thread per core.
pub fn init_rayon(threads: Option<usize>) {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = threads {
        builder = builder.num_threads(threads);
    }
    // Building twice fails; the first pool wins.
    if builder.build_global().is_ok() {
        debug!("Checking fixtures with {} threads", rayon::current_num_threads());
    }
}
