//! Type Resolution infrastructure

pub mod type_inference;

pub use type_inference::infer_var_types;
