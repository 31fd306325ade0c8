//! Test vectors and harness utilities for the ecid integration tests
pub mod alloc;
pub mod vectors;
