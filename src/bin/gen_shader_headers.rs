//! Generate C++ header files from GLSL shader sources
//!
//! Run with: gen-shader-headers <source_dir> <output_dir>

use std::process::ExitCode;

use sg_tools::{Program, logging, run_program};

fn main() -> ExitCode {
    logging::init();
    run_program(Program::ShaderHeaders, std::env::args_os().skip(1))
}
