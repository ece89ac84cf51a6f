mod build_ssa;

pub use build_ssa::BuildSsaUseCase;
