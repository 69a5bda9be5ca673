//! Fixture sets: several random files generated in one run

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sg_core::{ByteSize, Reporter};

use crate::{TestDataError, TestDataOptions, generate_test_data};

/// One file of a fixture set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    /// Path relative to the fixture base directory
    pub path: PathBuf,
    pub size: ByteSize,
}

impl Fixture {
    pub fn new(path: impl Into<PathBuf>, size: ByteSize) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }
}

/// The data files the engine's filesystem tests read
pub fn default_fixtures() -> Vec<Fixture> {
    [1, 10, 100, 1000]
        .into_iter()
        .map(|mb| Fixture::new(format!("TestData/{}MB.bin", mb), ByteSize::mib(mb)))
        .collect()
}

/// A fixture that could not be written
#[derive(Debug)]
pub struct FailedFixture {
    pub path: PathBuf,
    pub error: TestDataError,
}

/// Outcome of generating a fixture set
#[derive(Debug, Default)]
pub struct FixtureReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<FailedFixture>,
    pub bytes_written: u64,
}

impl FixtureReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Generate every fixture under `base_dir`
///
/// A failing fixture is reported and recorded; the rest are still written.
pub fn generate_fixtures(
    fixtures: &[Fixture],
    base_dir: &Path,
    options: &TestDataOptions,
    reporter: &mut dyn Reporter,
) -> FixtureReport {
    let mut report = FixtureReport::default();

    for fixture in fixtures {
        let path = base_dir.join(&fixture.path);
        match generate_test_data(fixture.size, &path, options, reporter) {
            Ok(bytes) => {
                report.bytes_written += bytes;
                report.written.push(path);
            }
            Err(error) => report.failed.push(FailedFixture { path, error }),
        }
    }

    log::debug!(
        "Fixture set done: {} written, {} failed, {} bytes",
        report.written.len(),
        report.failed.len(),
        report.bytes_written
    );
    report
}
