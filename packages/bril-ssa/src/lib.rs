/*
 * Bril SSA - phi/upsilon SSA construction for Bril programs
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Bril IR models (Program, Function, Instruction)
 * - features/    : flow_graph → type_resolution → ssa
 * - pipeline/    : Program driver
 * - config/      : Runtime configuration (YAML + env)
 *
 * Every tracked variable gets a phi at the top of every block and an
 * upsilon on every outgoing edge. The result is deliberately non-minimal:
 * no liveness, no dominance frontiers.
 */

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Whole-program driver
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::SsaConfig;
pub use errors::{ErrorKind, Result, SsaError};
pub use features::ssa::func_to_ssa;
pub use pipeline::to_ssa;
pub use shared::models::{Code, Function, Instruction, Operand, Program, Type};
