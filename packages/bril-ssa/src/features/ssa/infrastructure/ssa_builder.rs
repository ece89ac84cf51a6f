//! Phi/upsilon implementation of the [`SsaBuilder`] port

use crate::errors::Result;
use crate::features::ssa::ports::SsaBuilder;
use crate::shared::models::Function;

use super::function_ssa::func_to_ssa;
use super::verifier::verify_ssa;

/// Converts functions to phi/upsilon SSA, optionally verifying the output
#[derive(Debug, Clone, Copy)]
pub struct UpsilonSsaBuilder {
    verify: bool,
}

impl UpsilonSsaBuilder {
    pub fn new(verify: bool) -> Self {
        Self { verify }
    }
}

impl Default for UpsilonSsaBuilder {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SsaBuilder for UpsilonSsaBuilder {
    fn build_ssa(&self, func: Function) -> Result<Function> {
        let func = func_to_ssa(func)?;
        if self.verify {
            verify_ssa(&func)?;
        }
        Ok(func)
    }
}
