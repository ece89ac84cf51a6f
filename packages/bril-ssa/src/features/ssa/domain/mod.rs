//! SSA domain model

mod local_name;

pub use local_name::{BlockId, LocalName, NameTable, VarId};
