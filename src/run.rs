//! Command execution

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use sg_config::ToolsConfig;
use sg_core::Reporter;
use sg_shaders::process_shader_directory;
use sg_testdata::{generate_fixtures, generate_test_data};

use crate::cli::{Command, Invocation};

/// How a completed run should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStatus {
    /// Files that were skipped or could not be written
    pub failures: usize,
    /// Whether failures should turn into a non-zero exit
    pub strict: bool,
}

impl RunStatus {
    /// False only for strict runs that had failures
    pub fn is_success(&self) -> bool {
        !(self.strict && self.failures > 0)
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Run a parsed command
///
/// Per-file failures are reported through `reporter` and counted in the
/// returned status. `Err` is reserved for failures that stop the run:
/// configuration that cannot be loaded or an output directory that cannot
/// be created.
pub fn execute(
    invocation: &Invocation,
    reporter: &mut dyn Reporter,
    out: &mut dyn Write,
) -> anyhow::Result<RunStatus> {
    match &invocation.command {
        Command::PrintConfig => {
            out.write_all(ToolsConfig::generate_default_config().as_bytes())
                .context("writing default configuration")?;
            return Ok(RunStatus::default());
        }
        Command::WriteConfig { path } => {
            ToolsConfig::write_default_config(path)
                .with_context(|| format!("writing default configuration to {}", path.display()))?;
            log::info!(" -- Wrote default configuration: {}", path.display());
            return Ok(RunStatus::default());
        }
        Command::Help => return Ok(RunStatus::default()),
        _ => {}
    }

    let config = ToolsConfig::load(invocation.config.as_deref()).context("loading configuration")?;
    log::debug!("Running {}", invocation.command);

    match &invocation.command {
        Command::Shaders {
            source_dir,
            output_dir,
        } => {
            let report = process_shader_directory(
                source_dir,
                output_dir,
                &config.shaders.options(),
                reporter,
            )
            .with_context(|| format!("processing shader directory {}", source_dir.display()))?;

            Ok(RunStatus {
                failures: report.skipped.len(),
                strict: config.shaders.strict,
            })
        }
        Command::TestData { size, output } => {
            // Already reported; the exit status is decided by `strict`
            let failures = match generate_test_data(*size, output, &config.test_data.options(), reporter) {
                Ok(_) => 0,
                Err(_) => 1,
            };

            Ok(RunStatus {
                failures,
                strict: config.test_data.strict,
            })
        }
        Command::Fixtures { base_dir } => {
            let report = generate_fixtures(
                &config.test_data.fixtures,
                base_dir,
                &config.test_data.options(),
                reporter,
            );
            log::info!(
                " -- Wrote {} fixture(s), {} bytes",
                report.written.len(),
                report.bytes_written
            );

            Ok(RunStatus {
                failures: report.failed.len(),
                strict: config.test_data.strict,
            })
        }
        Command::PrintConfig | Command::WriteConfig { .. } | Command::Help => {
            Ok(RunStatus::default())
        }
    }
}
