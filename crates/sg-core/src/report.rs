//! Status reporting
//!
//! Tools never print directly. They emit `Report` events through a
//! `Reporter`, which the binaries back with the `log` facade and tests back
//! with a `RecordingReporter`.

use std::fmt;
use std::path::PathBuf;

/// A status event emitted by one of the tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Started scanning a shader source directory
    ProcessingDirectory(PathBuf),
    /// About to generate a header at this output path
    GeneratingHeader(PathBuf),
    /// Header for the named constant was written
    HeaderWritten { constant: String, path: PathBuf },
    /// A shader was skipped; no header was written for it.
    /// `reason` is the rendered error and already names the file.
    ShaderSkipped { path: PathBuf, reason: String },
    /// Random data was written
    TestDataWritten { bytes: u64, path: PathBuf },
    /// Random data could not be written
    TestDataFailed { path: PathBuf, reason: String },
}

impl Report {
    /// Whether this event describes a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Report::ShaderSkipped { .. } | Report::TestDataFailed { .. })
    }

    /// Log level the event is emitted at
    pub fn level(&self) -> log::Level {
        match self {
            Report::ShaderSkipped { .. } => log::Level::Warn,
            Report::TestDataFailed { .. } => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::ProcessingDirectory(dir) => {
                write!(f, " -- Processing source directory: {}", dir.display())
            }
            Report::GeneratingHeader(path) => {
                write!(f, " -- Generating header: {}", path.display())
            }
            Report::HeaderWritten { constant, .. } => {
                write!(f, " -- Successfully wrote header: {}.", constant)
            }
            Report::ShaderSkipped { reason, .. } => write!(f, "Error: {}", reason),
            Report::TestDataWritten { bytes, path } => write!(
                f,
                "Successfully saved {} bytes of random binary data to '{}'",
                bytes,
                path.display()
            ),
            Report::TestDataFailed { reason, .. } => write!(f, "Error: {}", reason),
        }
    }
}

/// Receives status events from the tools
pub trait Reporter {
    fn report(&mut self, event: Report);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, event: Report) {
        (**self).report(event)
    }
}

/// Reporter that forwards events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: Report) {
        log::log!(event.level(), "{}", event);
    }
}

/// Reporter that records every event for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    /// All events received, in order
    pub events: Vec<Report>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of failure events received
    pub fn failures(&self) -> usize {
        self.events.iter().filter(|e| e.is_failure()).count()
    }

    /// Rendered status lines, as the log reporter would print them
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: Report) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_format() {
        let event = Report::HeaderWritten {
            constant: "Blur_CS_Source".to_string(),
            path: PathBuf::from("out/Blur_CS.h"),
        };
        assert_eq!(event.to_string(), " -- Successfully wrote header: Blur_CS_Source.");

        let event = Report::TestDataWritten {
            bytes: 1024,
            path: PathBuf::from("data.bin"),
        };
        assert_eq!(
            event.to_string(),
            "Successfully saved 1024 bytes of random binary data to 'data.bin'"
        );
    }

    #[test]
    fn test_log_levels() {
        let skipped = Report::ShaderSkipped {
            path: PathBuf::from("a.glsl"),
            reason: "unreadable".to_string(),
        };
        let failed = Report::TestDataFailed {
            path: PathBuf::from("a.bin"),
            reason: "disk full".to_string(),
        };
        assert_eq!(skipped.level(), log::Level::Warn);
        assert_eq!(failed.level(), log::Level::Error);
        assert_eq!(
            Report::GeneratingHeader(PathBuf::from("a.h")).level(),
            log::Level::Info
        );
    }

    #[test]
    fn test_recording_reporter_counts_failures() {
        let mut reporter = RecordingReporter::new();
        reporter.report(Report::ProcessingDirectory(PathBuf::from("shaders")));
        reporter.report(Report::ShaderSkipped {
            path: PathBuf::from("shaders/bad.glsl"),
            reason: "permission denied".to_string(),
        });

        assert_eq!(reporter.events.len(), 2);
        assert_eq!(reporter.failures(), 1);
        assert_eq!(reporter.lines()[0], " -- Processing source directory: shaders");
    }

    #[test]
    fn test_reporter_through_mut_ref() {
        fn emit(mut reporter: impl Reporter) {
            reporter.report(Report::GeneratingHeader(PathBuf::from("a.h")));
        }

        let mut reporter = RecordingReporter::new();
        emit(&mut reporter);
        assert_eq!(reporter.events, vec![Report::GeneratingHeader(PathBuf::from("a.h"))]);
    }
}
