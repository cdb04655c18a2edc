/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context as _;
use clap::Parser;
use clap::ValueEnum;
use rayon::prelude::*;
use tracing::debug;
use tracing::info;

use crate::clap_env;
use crate::commands::common::CommonArgs;
use crate::commands::run::CommandExitStatus;
use crate::config::set_if_some;
use crate::config::ConfigFile;
use crate::config::HeaderPolicy;
use crate::config::RuleOrder;
use crate::error::error::print_error_counts;
use crate::error::error::print_errors;
use crate::error::error::FixtureError;
use crate::error::json::JsonErrors;
use crate::fixture::fixture::Fixture;
use crate::fixture::validate::validate;
use crate::fixture::validate::ValidationOptions;
use crate::golden::pairing::Pairing;
use crate::suppression::suppression::SuppressionMatcher;
use crate::util::display::count;
use crate::util::globs::Globs;
use crate::util::listing::FileList;

#[derive(Debug, Clone, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// Fixtures to check (glob supported). Directories are searched for `.py`/`.pyi` files.
    /// Defaults to the configured expected directory.
    files: Vec<String>,
    /// Write the problems to a file, instead of printing them.
    #[arg(long, short = 'o', env = clap_env("OUTPUT"))]
    output: Option<PathBuf>,
    #[clap(long, value_enum, default_value_t, env = clap_env("OUTPUT_FORMAT"))]
    output_format: OutputFormat,
    /// Count the number of each problem kind. Prints the top N kinds, or 5 if N is not specified.
    #[clap(
        long,
        default_missing_value = "5",
        require_equals = true,
        num_args = 0..=1,
        env = clap_env("COUNT_ERRORS")
    )]
    count_errors: Option<usize>,
    #[clap(long, value_enum, env = clap_env("HEADER"))]
    header: Option<HeaderPolicy>,
    #[clap(long, value_enum, env = clap_env("RULE_ORDER"))]
    rule_order: Option<RuleOrder>,
    /// Require every comment to be spelled exactly `  # <tool>: ignore[a, b]`.
    #[clap(long, env = clap_env("STRICT_SPACING"))]
    strict_spacing: bool,
    /// Also report expected fixtures that lack a matching input file.
    #[clap(long, env = clap_env("CHECK_PAIRS"))]
    check_pairs: bool,
    #[clap(flatten)]
    common: CommonArgs,
}

impl OutputFormat {
    fn write_text(path: &Path, errors: &[FixtureError]) -> anyhow::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        for e in errors {
            writeln!(file, "{e}")?;
        }
        file.flush()?;
        Ok(())
    }

    fn write_json(path: &Path, errors: &[FixtureError]) -> anyhow::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut file, &JsonErrors::from_errors(errors))?;
        Ok(file.flush()?)
    }

    fn write_errors_to_file(&self, path: &Path, errors: &[FixtureError]) -> anyhow::Result<()> {
        match self {
            Self::Text => Self::write_text(path, errors),
            Self::Json => Self::write_json(path, errors),
        }
        .with_context(|| format!("While writing problems to `{}`", path.display()))
    }
}

impl Args {
    fn override_config(&self, config: ConfigFile) -> ConfigFile {
        config.with_overrides(|c| {
            set_if_some(&mut c.header, self.header.as_ref());
            set_if_some(&mut c.rule_order, self.rule_order.as_ref());
            c.strict_spacing |= self.strict_spacing;
        })
    }

    fn file_list(&self, config: &ConfigFile) -> Globs {
        if self.files.is_empty() {
            Globs::new(vec![config.expected_dir().to_string_lossy().into_owned()])
        } else {
            Globs::new(self.files.clone())
        }
    }

    /// Validate every fixture in `files`. Fixtures are independent and read-only here,
    /// so they are checked in parallel.
    fn check_files(files: &[PathBuf], config: &ConfigFile) -> anyhow::Result<Vec<FixtureError>> {
        let matcher = SuppressionMatcher::new(&config.tool);
        let options = ValidationOptions::from_config(config);
        let per_file = files
            .par_iter()
            .map(|path| -> anyhow::Result<Vec<FixtureError>> {
                let fixture = Fixture::load(path, &matcher)?;
                let errors = validate(&fixture, &options);
                debug!(
                    "{}: {}",
                    path.display(),
                    count(fixture.suppressions().count(), "suppression")
                );
                Ok(errors)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(per_file.into_iter().flatten().collect())
    }

    pub fn run(self, config: ConfigFile) -> anyhow::Result<CommandExitStatus> {
        let start = Instant::now();
        let config = self.override_config(config);
        let files = self.file_list(&config).files()?;
        self.common.init_parallelism();

        let mut errors = Self::check_files(&files, &config)?;
        if self.check_pairs {
            let pairing = Pairing::discover(
                &config.expected_dir(),
                &config.input_dir(),
                &config.expected_suffix,
            )?;
            errors.extend(pairing.errors(&config.expected_suffix));
        }
        errors.sort();

        match &self.output {
            Some(path) => self.output_format.write_errors_to_file(path, &errors)?,
            None => print_errors(&errors),
        }
        if let Some(limit) = self.count_errors {
            print_error_counts(&errors, limit);
        }
        info!(
            "Checked {} in {:.2}s, {}",
            count(files.len(), "fixture"),
            start.elapsed().as_secs_f32(),
            count(errors.len(), "problem")
        );
        Ok(CommandExitStatus::from_problems(errors.len()))
    }
}
