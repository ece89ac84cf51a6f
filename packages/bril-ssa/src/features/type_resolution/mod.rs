//! Variable type resolution
//!
//! - domain/         - VarTypeMap
//! - infrastructure/ - per-function inference

pub mod domain;
pub mod infrastructure;

pub use domain::VarTypeMap;
pub use infrastructure::infer_var_types;
