//! SG Shaders - GLSL to C++ header embedding
//!
//! Turns every shader source in a directory into a header declaring a
//! `const char*` initialised with a raw string literal of the shader text:
//!
//! ```text
//! const char* Blur_CS_Source = R"(
//! <verbatim shader text>
//! )";
//! ```

mod error;
mod generator;
mod header;
mod source;

pub use error::ShaderError;
pub use generator::{DirectoryReport, ShaderOptions, SkippedShader, process_shader_directory};
pub use header::{GeneratedHeader, render_header, write_header};
pub use source::{ShaderSource, discover_shaders};
