//! Control flow graph construction
//!
//! - domain/         - Block, BlockMap
//! - infrastructure/ - block formation, naming, entry/terminator normalization

pub mod domain;
pub mod infrastructure;

pub use domain::{Block, BlockMap};
pub use infrastructure::{
    add_entry, add_terminators, block_map, form_blocks, reassemble, successor_map, successors,
};
