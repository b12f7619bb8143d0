//! Integration test utilities for the emoji service
//!
//! This crate provides helpers for running end-to-end checks against the
//! bundled emoji catalog files.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
