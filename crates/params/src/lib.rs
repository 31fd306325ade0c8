//! Constant values for the ecid identity layer
//!
//! Sizes, framing strings and protocol identifiers shared by the curve,
//! provider and entropy crates.

#![no_std]

pub mod traditional;
pub mod utils;
