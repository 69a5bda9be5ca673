//! SG Test Data - Random binary fixtures
//!
//! Writes files of operating-system-sourced random bytes. The data is not
//! seeded and not reproducible; it only needs to be incompressible and of
//! an exact length.

mod error;
mod fixtures;
mod random;

pub use error::TestDataError;
pub use fixtures::{FailedFixture, Fixture, FixtureReport, default_fixtures, generate_fixtures};
pub use random::{
    DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, TestDataOptions, fill_random, generate_test_data, write_random_file,
};
