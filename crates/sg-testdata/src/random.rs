//! Streaming random bytes to disk

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use rand::RngCore;
use rand::rngs::OsRng;
use sg_core::{ByteSize, Report, Reporter};

use crate::TestDataError;

/// Bytes requested from the OS per write
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;
/// Largest chunk ever allocated, whatever the options ask for
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Options for writing random data files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestDataOptions {
    /// Largest buffer filled and written at once, clamped to `1..=MAX_CHUNK_SIZE`
    pub chunk_size: usize,
    /// Create missing parent directories of the output file
    pub create_parents: bool,
}

impl Default for TestDataOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            create_parents: true,
        }
    }
}

/// Write exactly `len` random bytes to `writer`
///
/// Data is produced in chunks of at most `chunk_size` bytes, so the memory
/// used does not grow with `len`. Returns the number of bytes written.
pub fn fill_random<W: Write + ?Sized>(
    writer: &mut W,
    len: u64,
    chunk_size: usize,
) -> Result<u64, TestDataError> {
    let chunk_size = chunk_size.clamp(1, MAX_CHUNK_SIZE);
    let buf_len = usize::try_from(len).map_or(chunk_size, |len| len.min(chunk_size));
    let mut buf = vec![0u8; buf_len];

    let mut remaining = len;
    while remaining > 0 {
        let n = usize::try_from(remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let chunk = &mut buf[..n];
        OsRng.try_fill_bytes(chunk)?;
        writer.write_all(chunk).map_err(TestDataError::Stream)?;
        remaining -= n as u64;
    }

    writer.flush().map_err(TestDataError::Stream)?;
    Ok(len)
}

/// Create or truncate `path` and fill it with `size` random bytes
pub fn write_random_file(
    path: &Path,
    size: ByteSize,
    options: &TestDataOptions,
) -> Result<u64, TestDataError> {
    if options.create_parents {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TestDataError::CreateParent {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut file = File::create(path).map_err(|e| TestDataError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    fill_random(&mut file, size.bytes(), options.chunk_size).map_err(|e| match e {
        TestDataError::Stream(source) => TestDataError::Write {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Write a random data file and report the outcome
///
/// The error is reported and also returned; deciding whether it is fatal
/// is left to the caller.
pub fn generate_test_data(
    size: ByteSize,
    path: &Path,
    options: &TestDataOptions,
    reporter: &mut dyn Reporter,
) -> Result<u64, TestDataError> {
    match write_random_file(path, size, options) {
        Ok(bytes) => {
            reporter.report(Report::TestDataWritten {
                bytes,
                path: path.to_path_buf(),
            });
            Ok(bytes)
        }
        Err(e) => {
            reporter.report(Report::TestDataFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::RecordingReporter;
    use std::io;
    use tempfile::TempDir;

    /// Writer that fails after accepting `limit` bytes
    struct FailingWriter {
        written: usize,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written >= self.limit {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            let n = buf.len().min(self.limit - self.written);
            self.written += n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_fill_exact_length_across_chunks() {
        let mut out = Vec::new();
        let written = fill_random(&mut out, 1000, 64).unwrap();
        assert_eq!(written, 1000);
        assert_eq!(out.len(), 1000);
    }

    #[test]
    fn test_fill_zero_bytes() {
        let mut out = Vec::new();
        assert_eq!(fill_random(&mut out, 0, DEFAULT_CHUNK_SIZE).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_fill_zero_chunk_size() {
        let mut out = Vec::new();
        fill_random(&mut out, 17, 0).unwrap();
        assert_eq!(out.len(), 17);
    }

    #[test]
    fn test_fill_huge_chunk_size() {
        let mut out = Vec::new();
        fill_random(&mut out, 100, usize::MAX).unwrap();
        assert_eq!(out.len(), 100);
    }

    #[test]
    fn test_fill_is_not_constant() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        fill_random(&mut a, 4096, DEFAULT_CHUNK_SIZE).unwrap();
        fill_random(&mut b, 4096, DEFAULT_CHUNK_SIZE).unwrap();
        assert_ne!(a, b);
        assert!(a.iter().any(|&byte| byte != a[0]));
    }

    #[test]
    fn test_fill_propagates_writer_error() {
        let mut writer = FailingWriter { written: 0, limit: 100 };
        let err = fill_random(&mut writer, 1000, 64).unwrap_err();
        assert!(matches!(err, TestDataError::Stream(_)));
    }

    #[test]
    fn test_write_file_truncates_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, vec![0u8; 4096]).unwrap();

        write_random_file(&path, ByteSize::new(10), &TestDataOptions::default()).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 10);
    }

    #[test]
    fn test_write_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("TestData").join("nested").join("1KB.bin");

        write_random_file(&path, ByteSize::kib(1), &TestDataOptions::default()).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 1024);
    }

    #[test]
    fn test_write_file_without_parent_creation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("data.bin");
        let options = TestDataOptions {
            create_parents: false,
            ..TestDataOptions::default()
        };

        let err = write_random_file(&path, ByteSize::new(1), &options).unwrap_err();
        assert!(matches!(err, TestDataError::Create { .. }));
    }

    #[test]
    fn test_generate_reports_success() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.bin");
        let mut reporter = RecordingReporter::new();

        let bytes =
            generate_test_data(ByteSize::new(1024), &path, &TestDataOptions::default(), &mut reporter)
                .unwrap();

        assert_eq!(bytes, 1024);
        assert_eq!(
            reporter.events,
            vec![Report::TestDataWritten { bytes: 1024, path: path.clone() }]
        );
    }

    #[test]
    fn test_generate_reports_failure() {
        let dir = TempDir::new().unwrap();
        // The output path is an existing directory
        let mut reporter = RecordingReporter::new();

        let result =
            generate_test_data(ByteSize::new(8), dir.path(), &TestDataOptions::default(), &mut reporter);

        assert!(matches!(result, Err(TestDataError::Create { .. })));
        assert_eq!(reporter.failures(), 1);
        assert!(reporter.lines()[0].starts_with("Error: "));
    }
}
