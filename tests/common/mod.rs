//! Common test utilities and helpers.
//!
//! This module provides shared functionality for all tests, including:
//! - Custom assertions
//! - CSV fixtures and builders

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::*;
