//! Utility constants

pub mod entropy;
pub mod hash;
