//! Shared fixtures for integration tests.
//!
//! - `sample_forest()`: a small directory with folders, nesting and a
//!   read-only subtree
//! - `TestEnv`: isolated temp dir for driving the `ptree` binary

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
