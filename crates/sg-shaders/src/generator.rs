//! Directory pass: one header per shader

use std::fs;
use std::path::{Path, PathBuf};

use sg_core::{HeaderStyle, Report, Reporter};

use crate::{GeneratedHeader, ShaderError, ShaderSource, discover_shaders, write_header};

/// Options for a directory pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderOptions {
    /// Extension of shader sources, without the dot
    pub extension: String,
    /// Extension of generated headers, without the dot
    pub header_extension: String,
    pub style: HeaderStyle,
}

impl Default for ShaderOptions {
    fn default() -> Self {
        Self {
            extension: "glsl".to_string(),
            header_extension: "h".to_string(),
            style: HeaderStyle::default(),
        }
    }
}

impl ShaderOptions {
    /// Output path for a shader with the given stem
    pub fn header_path(&self, output_dir: &Path, stem: &str) -> PathBuf {
        output_dir.join(format!("{}.{}", stem, self.header_extension))
    }
}

/// A shader that produced no header
#[derive(Debug)]
pub struct SkippedShader {
    pub path: PathBuf,
    pub error: ShaderError,
}

/// Outcome of a directory pass
#[derive(Debug, Default)]
pub struct DirectoryReport {
    pub generated: Vec<GeneratedHeader>,
    pub skipped: Vec<SkippedShader>,
}

impl DirectoryReport {
    /// True when every discovered shader produced a header
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Generate a header in `output_dir` for every shader in `source_dir`
///
/// The output directory is created with its parents. Failing to create it,
/// or to list the source directory, ends the pass with `Err`. A shader that
/// cannot be read, rendered or written is reported, recorded in
/// `DirectoryReport::skipped`, and the pass moves on.
pub fn process_shader_directory(
    source_dir: &Path,
    output_dir: &Path,
    options: &ShaderOptions,
    reporter: &mut dyn Reporter,
) -> Result<DirectoryReport, ShaderError> {
    if !options.style.delimiter_is_valid() {
        return Err(ShaderError::InvalidDelimiter(options.style.delimiter.clone()));
    }

    reporter.report(Report::ProcessingDirectory(source_dir.to_path_buf()));

    fs::create_dir_all(output_dir).map_err(|e| ShaderError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut report = DirectoryReport::default();
    for path in discover_shaders(source_dir, &options.extension)? {
        match generate_one(&path, output_dir, options, reporter) {
            Ok(generated) => {
                reporter.report(Report::HeaderWritten {
                    constant: generated.constant.clone(),
                    path: generated.output.clone(),
                });
                report.generated.push(generated);
            }
            Err(error) => {
                reporter.report(Report::ShaderSkipped {
                    path: path.clone(),
                    reason: error.to_string(),
                });
                report.skipped.push(SkippedShader { path, error });
            }
        }
    }

    Ok(report)
}

fn generate_one(
    path: &Path,
    output_dir: &Path,
    options: &ShaderOptions,
    reporter: &mut dyn Reporter,
) -> Result<GeneratedHeader, ShaderError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ShaderError::InvalidFileName(path.to_path_buf()))?;
    let output = options.header_path(output_dir, stem);
    reporter.report(Report::GeneratingHeader(output.clone()));

    let source = ShaderSource::read(path)?;
    write_header(&source, &output, &options.style)
}
