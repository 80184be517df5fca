//! Generic structures, not specific to a solve.

pub mod geometric;
