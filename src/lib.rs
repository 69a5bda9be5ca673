//! SG Tools - build-time asset utilities
//!
//! The work lives in the member crates:
//! - `sg-shaders` - GLSL to C++ header embedding
//! - `sg-testdata` - Random binary test fixtures
//! - `sg-config` - TOML configuration
//! - `sg-core` - Shared types and the reporting interface
//!
//! This crate holds the command line front-ends. Each binary is a thin
//! wrapper around `run_program`.

pub mod cli;
pub mod logging;
pub mod run;

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

use sg_core::LogReporter;

pub use cli::{Command, Invocation, Program, UsageError, parse_args};
pub use run::{RunStatus, execute};

/// Usage errors exit like a conventional argument parser
const USAGE_EXIT_CODE: u8 = 2;

/// Parse `args` (without the program name) for `program` and run it
pub fn run_program<I>(program: Program, args: I) -> ExitCode
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let invocation = match parse_args(program, args) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprint!("{}", program.usage());
            eprintln!("{}: error: {}", program.name(), e);
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    if invocation.command == Command::Help {
        print!("{}", program.usage());
        return ExitCode::SUCCESS;
    }

    match execute(&invocation, &mut LogReporter, &mut io::stdout()) {
        Ok(status) => status.exit_code(),
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
