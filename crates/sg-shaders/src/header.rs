//! Header rendering

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use sg_core::HeaderStyle;

use crate::{ShaderError, ShaderSource};

/// A header written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedHeader {
    /// Shader the header was generated from
    pub source: PathBuf,
    /// Path of the written header
    pub output: PathBuf,
    /// Name of the declared constant
    pub constant: String,
}

/// Render the header text for a shader
///
/// The literal body is the shader text with one newline before and one
/// after, so the embedded string starts and ends with `\n`.
pub fn render_header(source: &ShaderSource, style: &HeaderStyle) -> Result<String, ShaderError> {
    if !style.delimiter_is_valid() {
        return Err(ShaderError::InvalidDelimiter(style.delimiter.clone()));
    }

    let terminator = style.close_literal();
    if source.text.contains(&terminator) {
        return Err(ShaderError::DelimiterCollision {
            path: source.path.clone(),
            terminator,
        });
    }

    let mut header = String::with_capacity(source.text.len() + 64);
    if style.pragma_once {
        header.push_str("#pragma once\n");
    }
    if style.static_linkage {
        header.push_str("static ");
    }
    // Writing into a String cannot fail
    let _ = write!(
        header,
        "const char* {} = {}\n{}\n{};\n",
        source.constant_name(style),
        style.open_literal(),
        source.text,
        terminator
    );
    Ok(header)
}

/// Render a shader and write it to `output`, overwriting any existing file
pub fn write_header(
    source: &ShaderSource,
    output: &Path,
    style: &HeaderStyle,
) -> Result<GeneratedHeader, ShaderError> {
    let header = render_header(source, style)?;
    fs::write(output, header).map_err(|e| ShaderError::Write {
        path: output.to_path_buf(),
        source: e,
    })?;

    Ok(GeneratedHeader {
        source: source.path.clone(),
        output: output.to_path_buf(),
        constant: source.constant_name(style),
    })
}
