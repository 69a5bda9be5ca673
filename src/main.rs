//! sg-tools: umbrella binary for the build-time asset utilities
//!
//! ```sh
//! sg-tools shaders Modules/Graphics/Shaders Modules/Graphics/Shaders/Include
//! sg-tools testdata 10MiB TestData/10MB.bin
//! sg-tools fixtures
//! sg-tools config > sg-tools.toml
//! ```

use std::process::ExitCode;

use sg_tools::{Program, logging, run_program};

fn main() -> ExitCode {
    logging::init();
    run_program(Program::Tools, std::env::args_os().skip(1))
}
