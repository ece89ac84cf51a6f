/*
 * Program Driver
 *
 * Applies the SSA conversion to every function of a program. Functions
 * share no state, so they may run on the rayon pool; results are collected
 * in input order either way, which keeps the output byte-identical between
 * sequential and parallel runs.
 */

use rayon::prelude::*;
use std::time::Instant;

use crate::config::SsaConfig;
use crate::errors::Result;
use crate::features::ssa::{BuildSsaUseCase, SsaBuilder, UpsilonSsaBuilder};
use crate::shared::models::{Function, Program};

/// Convert every function in `program` to phi/upsilon SSA form
///
/// # Errors
///
/// The first error of any function aborts the whole conversion; no partial
/// program is returned.
pub fn to_ssa(program: Program, config: &SsaConfig) -> Result<Program> {
    let use_case = BuildSsaUseCase::new(UpsilonSsaBuilder::new(config.verify));
    run_program(program, &use_case, config.parallel)
}

/// Run `use_case` over every function of `program`
pub fn run_program<B: SsaBuilder>(
    program: Program,
    use_case: &BuildSsaUseCase<B>,
    parallel: bool,
) -> Result<Program> {
    let start = Instant::now();
    let Program { functions, extra } = program;
    let count = functions.len();

    let functions: Vec<Function> = if parallel {
        functions
            .into_par_iter()
            .map(|func| use_case.execute(func))
            .collect::<Result<Vec<_>>>()?
    } else {
        functions
            .into_iter()
            .map(|func| use_case.execute(func))
            .collect::<Result<Vec<_>>>()?
    };

    tracing::info!(
        "Converted {} functions to SSA in {:?} (parallel={})",
        count,
        start.elapsed(),
        parallel
    );

    Ok(Program { functions, extra })
}
