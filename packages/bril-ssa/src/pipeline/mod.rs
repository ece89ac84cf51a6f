//! Whole-program orchestration

pub mod program_driver;

pub use program_driver::{run_program, to_ssa};
