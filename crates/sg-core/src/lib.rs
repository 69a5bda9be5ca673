//! SG Core - Shared types for the build-time asset tools
//!
//! This crate provides:
//! - Byte size parsing with unit suffixes (`ByteSize`)
//! - Header rendering options shared by the shader tool and its config (`HeaderStyle`)
//! - The reporting interface every tool emits status through (`Reporter`)

pub mod report;
pub mod size;
pub mod style;

pub use report::{LogReporter, RecordingReporter, Report, Reporter};
pub use size::{ByteSize, ByteSizeError};
pub use style::HeaderStyle;
