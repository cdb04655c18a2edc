/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::ops::Deref;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use clap::ValueEnum;
use dupe::Dupe;
use serde::Deserialize;
use tracing::debug;

use crate::fixture::compare::CompareMode;
use crate::util::fs_anyhow;
use crate::util::fs_upward_search;

pub const CONFIG_FILE_NAME: &str = "pyright_ignore.toml";

/// Whether a fixture must begin with a `# <path>` comment naming itself.
#[derive(Debug, Clone, Copy, Dupe, PartialEq, Eq, Hash, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderPolicy {
    #[default]
    Optional,
    Required,
    Forbidden,
}

/// Whether rule identifiers inside one bracket list must be sorted.
#[derive(Debug, Clone, Copy, Dupe, PartialEq, Eq, Hash, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RuleOrder {
    #[default]
    Any,
    Alphabetical,
}

#[derive(Clone, Dupe, Debug, PartialEq, Eq, Hash)]
pub struct ConfigFile(Arc<ConfigFileInner>);

#[derive(Debug, PartialEq, Eq, Hash, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileInner {
    /// The tool named in suppression comments, `pyright` in `# pyright: ignore[...]`.
    #[serde(default = "ConfigFile::default_tool")]
    pub tool: String,

    /// Where the expected (golden) fixtures live, relative to the config file.
    #[serde(default = "ConfigFile::default_expected_dir")]
    pub expected_dir: PathBuf,

    /// Where the input fixtures live, relative to the config file.
    #[serde(default = "ConfigFile::default_input_dir")]
    pub input_dir: PathBuf,

    /// `<case><expected_suffix>.py` in `expected_dir` pairs with `<case>.py` in `input_dir`.
    #[serde(default = "ConfigFile::default_expected_suffix")]
    pub expected_suffix: String,

    #[serde(default)]
    pub header: HeaderPolicy,

    #[serde(default)]
    pub rule_order: RuleOrder,

    /// Require comments to be spelled exactly `  # <tool>: ignore[a, b]`.
    #[serde(default)]
    pub strict_spacing: bool,

    #[serde(default)]
    pub compare_mode: CompareMode,

    /// Directory containing the config file. Relative paths above resolve against it.
    #[serde(skip)]
    pub root: PathBuf,
}

impl Default for ConfigFile {
    fn default() -> ConfigFile {
        ConfigFileInner {
            tool: Self::default_tool(),
            expected_dir: Self::default_expected_dir(),
            input_dir: Self::default_input_dir(),
            expected_suffix: Self::default_expected_suffix(),
            header: HeaderPolicy::default(),
            rule_order: RuleOrder::default(),
            strict_spacing: false,
            compare_mode: CompareMode::default(),
            root: PathBuf::from("."),
        }
        .into()
    }
}

impl Deref for ConfigFile {
    type Target = ConfigFileInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ConfigFileInner> for ConfigFile {
    fn from(inner: ConfigFileInner) -> Self {
        ConfigFile(Arc::new(inner))
    }
}

pub fn set_if_some<T: Clone>(config_field: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        *config_field = value.clone();
    }
}

impl ConfigFile {
    pub fn default_tool() -> String {
        "pyright".to_owned()
    }

    pub fn default_expected_dir() -> PathBuf {
        PathBuf::from("test/expected")
    }

    pub fn default_input_dir() -> PathBuf {
        PathBuf::from("test")
    }

    pub fn default_expected_suffix() -> String {
        "_quickfixed".to_owned()
    }

    pub fn from_toml(contents: &str, root: &Path) -> anyhow::Result<Self> {
        let mut inner: ConfigFileInner = toml::from_str(contents)?;
        inner.root = root.to_owned();
        Ok(inner.into())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs_anyhow::read_to_string(path)?;
        let root = path.parent().unwrap_or(Path::new("."));
        Self::from_toml(&contents, root)
            .with_context(|| format!("When parsing config file `{}`", path.display()))
    }

    /// Apply command line overrides. Clones the inner config only if it is shared.
    pub fn with_overrides(mut self, f: impl FnOnce(&mut ConfigFileInner)) -> Self {
        f(Arc::make_mut(&mut self.0));
        self
    }

    pub fn expected_dir(&self) -> PathBuf {
        self.root.join(&self.expected_dir)
    }

    pub fn input_dir(&self) -> PathBuf {
        self.root.join(&self.input_dir)
    }
}

/// Load `explicit` if given, otherwise the nearest `pyright_ignore.toml` above `start_dir`,
/// otherwise the defaults rooted at `start_dir`.
pub fn find_config(explicit: Option<&Path>, start_dir: &Path) -> anyhow::Result<ConfigFile> {
    if let Some(path) = explicit {
        return ConfigFile::from_file(path);
    }
    match fs_upward_search::first_match(start_dir, CONFIG_FILE_NAME) {
        Some(path) => {
            debug!("Using config file `{}`", path.display());
            ConfigFile::from_file(&path)
        }
        None => {
            debug!("No `{CONFIG_FILE_NAME}` found, using defaults");
            Ok(ConfigFile::default().with_overrides(|c| c.root = start_dir.to_owned()))
        }
    }
}
