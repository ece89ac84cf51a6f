//! SSA infrastructure
//!
//! Block renaming, function-level conversion with entry bootstrap, and
//! output verification.

pub mod block_renamer;
pub mod function_ssa;
pub mod ssa_builder;
pub mod verifier;

pub use block_renamer::rename_block;
pub use function_ssa::{entry_prelude, func_to_ssa};
pub use ssa_builder::UpsilonSsaBuilder;
pub use verifier::verify_ssa;
