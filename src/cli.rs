//! Command line parsing
//!
//! Arguments are turned into a `Command` without touching the filesystem;
//! `run::execute` performs it.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use sg_core::{ByteSize, ByteSizeError};
use thiserror::Error;

/// Which front-end is parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// `gen-shader-headers <source_dir> <output_dir>`
    ShaderHeaders,
    /// `gen-test-data <size> <output>`
    TestData,
    /// `sg-tools <subcommand> ...`
    Tools,
}

impl Program {
    pub fn name(self) -> &'static str {
        match self {
            Program::ShaderHeaders => "gen-shader-headers",
            Program::TestData => "gen-test-data",
            Program::Tools => "sg-tools",
        }
    }

    pub fn usage(self) -> String {
        let body = match self {
            Program::ShaderHeaders => "\
usage: gen-shader-headers [--config <path>] <source_dir> <output_dir>

Generate C++ header files from GLSL shader sources.

positional arguments:
  source_dir       Directory containing shader source files.
  output_dir       Output directory to save the header files.",
            Program::TestData => "\
usage: gen-test-data [--config <path>] <size> <output>

Generate random binary data and save it to a file.

positional arguments:
  size             Size of the random binary data in bytes (units: KB, MB, GB, KiB, MiB, GiB).
  output           Output file path to save the binary data.",
            Program::Tools => "\
usage: sg-tools [--config <path>] <command> [args]

Build-time asset utilities.

commands:
  shaders <source_dir> <output_dir>   Generate C++ headers from GLSL sources.
  testdata <size> <output>            Write a file of random bytes.
  fixtures [base_dir]                 Write the configured fixture set (default base: .).
  config [path]                       Print the default configuration file, or write it to path.",
        };
        format!(
            "{}\n\noptions:\n  -h, --help       Show this help message and exit.\n  --config <path>  Read settings from this TOML file.\n",
            body
        )
    }
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate one header per shader in `source_dir`
    Shaders {
        source_dir: PathBuf,
        output_dir: PathBuf,
    },
    /// Write `size` random bytes to `output`
    TestData { size: ByteSize, output: PathBuf },
    /// Write the configured fixture set under `base_dir`
    Fixtures { base_dir: PathBuf },
    /// Print the commented default configuration
    PrintConfig,
    /// Write the commented default configuration to `path`
    WriteConfig { path: PathBuf },
    /// Print usage and exit successfully
    Help,
}

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    /// Explicit `--config` path
    pub config: Option<PathBuf>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    #[error("the following arguments are required: {0}")]
    Missing(String),

    #[error("unrecognized arguments: {0}")]
    Unexpected(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} expects a value")]
    MissingValue(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("argument {name}: {value:?} is not valid UTF-8")]
    NotUnicode { name: &'static str, value: String },

    #[error("argument size: {0}")]
    InvalidSize(#[from] ByteSizeError),
}

/// Flags and positionals split apart
#[derive(Debug, Default)]
struct RawArgs {
    config: Option<PathBuf>,
    help: bool,
    positional: Vec<OsString>,
}

/// Positionals rendered for an error message
fn lossy_join(args: &[OsString]) -> String {
    args.iter()
        .map(|arg| arg.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paths stay `OsString`; only flag names must be UTF-8
fn split_args<I>(args: I) -> Result<RawArgs, UsageError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut raw = RawArgs::default();
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let mut only_positional = false;

    while let Some(arg) = args.next() {
        let bytes = arg.as_encoded_bytes();
        if only_positional || bytes == b"-" || !bytes.starts_with(b"-") {
            raw.positional.push(arg);
            continue;
        }
        let Some(flag) = arg.to_str() else {
            return Err(UsageError::UnknownOption(arg.to_string_lossy().into_owned()));
        };
        match flag {
            "--" => only_positional = true,
            "-h" | "--help" => raw.help = true,
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| UsageError::MissingValue(flag.to_string()))?;
                raw.config = Some(PathBuf::from(value));
            }
            _ => match flag.strip_prefix("--config=") {
                Some(value) if !value.is_empty() => raw.config = Some(PathBuf::from(value)),
                Some(_) => return Err(UsageError::MissingValue("--config".to_string())),
                None => return Err(UsageError::UnknownOption(flag.to_string())),
            },
        }
    }

    Ok(raw)
}

/// Take exactly the named positionals, in order
fn take_positionals<const N: usize>(
    positional: Vec<OsString>,
    names: [&str; N],
) -> Result<[OsString; N], UsageError> {
    if positional.len() < N {
        return Err(UsageError::Missing(names[positional.len()..].join(", ")));
    }
    if positional.len() > N {
        return Err(UsageError::Unexpected(lossy_join(&positional[N..])));
    }
    positional
        .try_into()
        .map_err(|rest: Vec<OsString>| UsageError::Unexpected(lossy_join(&rest)))
}

fn shaders_command(positional: Vec<OsString>) -> Result<Command, UsageError> {
    let [source_dir, output_dir] = take_positionals(positional, ["source_dir", "output_dir"])?;
    Ok(Command::Shaders {
        source_dir: source_dir.into(),
        output_dir: output_dir.into(),
    })
}

fn test_data_command(positional: Vec<OsString>) -> Result<Command, UsageError> {
    let [size, output] = take_positionals(positional, ["size", "output"])?;
    let size = size.to_str().ok_or_else(|| UsageError::NotUnicode {
        name: "size",
        value: size.to_string_lossy().into_owned(),
    })?;
    Ok(Command::TestData {
        size: size.parse()?,
        output: output.into(),
    })
}

/// Parse arguments (without the program name) for a front-end
pub fn parse_args<I>(program: Program, args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let raw = split_args(args)?;
    let config = raw.config;
    if raw.help {
        return Ok(Invocation {
            command: Command::Help,
            config,
        });
    }

    let command = match program {
        Program::ShaderHeaders => shaders_command(raw.positional)?,
        Program::TestData => test_data_command(raw.positional)?,
        Program::Tools => {
            let mut positional = raw.positional.into_iter();
            let name = positional
                .next()
                .ok_or_else(|| UsageError::Missing("command".to_string()))?;
            let rest: Vec<OsString> = positional.collect();
            let Some(name) = name.to_str() else {
                return Err(UsageError::UnknownCommand(name.to_string_lossy().into_owned()));
            };
            match name {
                "shaders" => shaders_command(rest)?,
                "testdata" => test_data_command(rest)?,
                "fixtures" => match rest.len() {
                    0 => Command::Fixtures {
                        base_dir: PathBuf::from("."),
                    },
                    1 => Command::Fixtures {
                        base_dir: PathBuf::from(&rest[0]),
                    },
                    _ => return Err(UsageError::Unexpected(lossy_join(&rest[1..]))),
                },
                "config" => match rest.len() {
                    0 => Command::PrintConfig,
                    1 => Command::WriteConfig {
                        path: PathBuf::from(&rest[0]),
                    },
                    _ => return Err(UsageError::Unexpected(lossy_join(&rest[1..]))),
                },
                "help" => Command::Help,
                _ => return Err(UsageError::UnknownCommand(name.to_string())),
            }
        }
    };

    Ok(Invocation { command, config })
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Shaders {
                source_dir,
                output_dir,
            } => write!(f, "shaders {} -> {}", source_dir.display(), output_dir.display()),
            Command::TestData { size, output } => {
                write!(f, "testdata {} bytes -> {}", size, output.display())
            }
            Command::Fixtures { base_dir } => write!(f, "fixtures in {}", base_dir.display()),
            Command::PrintConfig => write!(f, "config"),
            Command::WriteConfig { path } => write!(f, "config -> {}", path.display()),
            Command::Help => write!(f, "help"),
        }
    }
}
