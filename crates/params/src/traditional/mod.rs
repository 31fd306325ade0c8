//! Constants for elliptic-curve identity keys

pub mod ec;
pub mod groups;
pub mod pem;
