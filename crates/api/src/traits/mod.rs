//! Public traits of the identity layer

pub mod entropy;

pub use entropy::{fill_trampoline, EntropySource, RawGenerator, RngFn};
