//! Common test utilities for bril-ssa
//!
//! Shared fixtures, a block-level view of converted functions, and
//! SSA-specific assertions.

#![allow(dead_code)]

mod assertions;
mod fixtures;
mod view;

pub use assertions::*;
pub use fixtures::*;
pub use view::*;
