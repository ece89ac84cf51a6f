mod var_types;

pub use var_types::VarTypeMap;
