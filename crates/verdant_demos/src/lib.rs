//! Shared pieces of the demo binaries.

pub mod grass;
pub mod showcase;
