//! Header rendering style

use serde::{Deserialize, Serialize};

/// Longest d-char sequence a C++ raw string literal accepts
pub const MAX_DELIMITER_LEN: usize = 16;

/// How an embedded shader header is laid out
///
/// The default renders `const char* <stem>_Source = R"(` ... `)";`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    /// Emit `#pragma once` as the first line
    pub pragma_once: bool,
    /// Declare the constant `static`
    pub static_linkage: bool,
    /// Raw string d-char sequence placed between `R"` and `(`
    pub delimiter: String,
    /// Appended to the file stem to form the constant name
    pub suffix: String,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            pragma_once: false,
            static_linkage: false,
            delimiter: String::new(),
            suffix: "_Source".to_string(),
        }
    }
}

impl HeaderStyle {
    /// Style of the engine's checked-in headers:
    /// `#pragma once` + `static const char* X = R""(...)"";`
    pub fn engine() -> Self {
        Self {
            pragma_once: true,
            static_linkage: true,
            delimiter: "\"".to_string(),
            ..Self::default()
        }
    }

    /// Opening token of the raw literal, e.g. `R"(`
    pub fn open_literal(&self) -> String {
        format!("R\"{}(", self.delimiter)
    }

    /// Closing token of the raw literal, e.g. `)"`
    pub fn close_literal(&self) -> String {
        format!("){}\"", self.delimiter)
    }

    /// Whether the delimiter is a legal d-char sequence
    pub fn delimiter_is_valid(&self) -> bool {
        self.delimiter.len() <= MAX_DELIMITER_LEN
            && self.delimiter.chars().all(|c| {
                c.is_ascii_graphic() && !matches!(c, '(' | ')' | '\\')
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_literal_tokens() {
        let style = HeaderStyle::default();
        assert_eq!(style.open_literal(), "R\"(");
        assert_eq!(style.close_literal(), ")\"");
        assert_eq!(style.suffix, "_Source");
        assert!(style.delimiter_is_valid());
    }

    #[test]
    fn test_engine_style_tokens() {
        let style = HeaderStyle::engine();
        assert_eq!(style.open_literal(), "R\"\"(");
        assert_eq!(style.close_literal(), ")\"\"");
        assert!(style.pragma_once);
        assert!(style.static_linkage);
        assert!(style.delimiter_is_valid());
    }

    #[test]
    fn test_invalid_delimiters() {
        let mut style = HeaderStyle::default();
        style.delimiter = "a b".to_string();
        assert!(!style.delimiter_is_valid());
        style.delimiter = "x(".to_string();
        assert!(!style.delimiter_is_valid());
        style.delimiter = "x".repeat(MAX_DELIMITER_LEN + 1);
        assert!(!style.delimiter_is_valid());
        style.delimiter = "glsl".to_string();
        assert!(style.delimiter_is_valid());
    }

    #[test]
    fn test_partial_style() {
        let style: HeaderStyle = toml::from_str("pragma_once = true").unwrap();
        assert!(style.pragma_once);
        assert_eq!(style.suffix, "_Source");
    }
}
