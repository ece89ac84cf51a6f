use crate::errors::Result;
use crate::features::ssa::ports::SsaBuilder;
use crate::shared::models::Function;

pub struct BuildSsaUseCase<B: SsaBuilder> {
    builder: B,
}

impl<B: SsaBuilder> BuildSsaUseCase<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    pub fn execute(&self, func: Function) -> Result<Function> {
        self.builder.build_ssa(func)
    }
}
