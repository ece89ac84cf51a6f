/*
 * Variable Type Inference
 *
 * Bril requires a single type per variable per function, so "inference"
 * is a scan: seed from parameters, then overlay every destination's
 * declared type in instruction order.
 *
 * Conflict policy: the last declaration wins. Well-typed input never
 * conflicts; when it does, a warning is logged and the overlay proceeds.
 */

use crate::errors::{Result, SsaError};
use crate::features::type_resolution::domain::VarTypeMap;
use crate::shared::models::{Code, Function};

/// Compute the type of every parameter and destination in `func`
///
/// # Errors
///
/// `MalformedIr` if an instruction has a `dest` but no `type`.
pub fn infer_var_types(func: &Function) -> Result<VarTypeMap> {
    let mut types: VarTypeMap = func
        .args()
        .iter()
        .map(|arg| (arg.name.clone(), arg.ty.clone()))
        .collect();

    for instr in func.instrs.iter().filter_map(Code::as_instruction) {
        let Some(dest) = &instr.dest else {
            continue;
        };
        let ty = instr.ty.clone().ok_or_else(|| {
            SsaError::malformed(format!(
                "'{}' in function '{}' defines '{}' without a type",
                instr.op, func.name, dest
            ))
        })?;

        if let Some(previous) = types.insert(dest.clone(), ty.clone()) {
            if previous != ty {
                tracing::warn!(
                    "Variable '{}' in function '{}' redeclared as {} (was {}); using {}",
                    dest,
                    func.name,
                    ty,
                    previous,
                    ty
                );
            }
        }
    }

    Ok(types)
}
