//! Testing infrastructure for waymark integration tests.
//!
//! - `TestWorld`: isolated data directory and working directory for CLI runs
//! - `assertions`: checks against the JSON envelope the CLI prints
//! - `fixtures`: snapshot documents in the export format
//! - `server`: one-shot HTTP endpoint that records uploaded missions

pub mod assertions;
pub mod fixtures;
pub mod server;
pub mod world;

pub use server::{ReceivedRequest, StubServer};
pub use world::{CliResult, TestWorld};
