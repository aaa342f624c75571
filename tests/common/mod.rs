//! Common test utilities for groupsync integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated test environment with temp directories
//! - Fixtures: reusable project documents and builders

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
