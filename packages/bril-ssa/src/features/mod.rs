//! Feature modules - each feature follows Hexagonal Architecture
//!
//! - domain/         - Pure data types
//! - ports/          - Interface definitions (traits)
//! - application/    - Use cases
//! - infrastructure/ - Implementations

pub mod flow_graph;
pub mod ssa;
pub mod type_resolution;
