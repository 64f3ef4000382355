//! Generic trait abstractions
//!
//! The commitment scheme core never touches curve coordinates; it consumes
//! the narrow group capability defined here and stays portable across any
//! conforming pairing backend.

pub mod group;

pub use group::{CommitmentGroup, TargetGroup};
