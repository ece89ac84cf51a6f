//! Phi/upsilon SSA construction
//!
//! - domain/         - structured local names and their index table
//! - ports/          - SsaBuilder trait
//! - application/    - BuildSsaUseCase
//! - infrastructure/ - renamer, function conversion, verifier

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::BuildSsaUseCase;
pub use domain::{LocalName, NameTable};
pub use infrastructure::{func_to_ssa, rename_block, verify_ssa, UpsilonSsaBuilder};
pub use ports::SsaBuilder;
