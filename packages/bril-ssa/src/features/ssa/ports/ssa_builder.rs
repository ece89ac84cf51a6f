use crate::errors::Result;
use crate::shared::models::Function;

pub trait SsaBuilder: Send + Sync {
    fn build_ssa(&self, func: Function) -> Result<Function>;
}
