//! Bril IR data model
//!
//! The JSON schema is the single source of truth: every type here
//! round-trips through serde, and fields we don't interpret are preserved.

pub mod instruction;
pub mod program;

pub use instruction::{
    Code, Instruction, Label, Operand, Type, OP_BR, OP_JMP, OP_PHI, OP_RET, OP_UPSILON,
    TERMINATORS, UNDEF_SENTINEL,
};
pub use program::{Argument, Function, Program};
