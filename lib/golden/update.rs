/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::path::Path;

use tracing::info;

use crate::util::fs_anyhow;

/// Replace the golden file at `expected` with `actual`, wholesale.
/// Returns whether the file changed. A missing golden file is created.
pub fn update_golden(expected: &Path, actual: &str) -> anyhow::Result<bool> {
    if expected.is_file() && fs_anyhow::read_to_string(expected)? == actual {
        return Ok(false);
    }
    fs_anyhow::write(expected, actual.as_bytes())?;
    info!("Updated golden file `{}`", expected.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_golden() {
        let tdir = tempfile::tempdir().unwrap();
        let path = tdir.path().join("a_quickfixed.py");

        assert!(update_golden(&path, "x = 1\n").unwrap());
        assert_eq!(fs_anyhow::read_to_string(&path).unwrap(), "x = 1\n");

        assert!(!update_golden(&path, "x = 1\n").unwrap());

        assert!(update_golden(&path, "x = 1  # pyright: ignore[reportA]\n").unwrap());
        assert_eq!(
            fs_anyhow::read_to_string(&path).unwrap(),
            "x = 1  # pyright: ignore[reportA]\n"
        );
    }
}
