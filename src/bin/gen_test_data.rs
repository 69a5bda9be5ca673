//! Generate random binary data and save it to a file
//!
//! Run with: gen-test-data <size> <output>

use std::process::ExitCode;

use sg_tools::{Program, logging, run_program};

fn main() -> ExitCode {
    logging::init();
    run_program(Program::TestData, std::env::args_os().skip(1))
}
