//! Block formation and CFG construction

pub mod cfg;
pub mod form_blocks;

pub use cfg::{
    add_entry, add_terminators, block_map, reassemble, successor_map, successors, BLOCK_SEED,
    ENTRY_SEED,
};
pub use form_blocks::form_blocks;
