/*
 * SSA Output Verification
 *
 * Post-conditions of the conversion that do not depend on the input being
 * well-formed. A failure here is a bug in the renamer, so it is reported
 * as an internal error rather than as malformed input.
 */

use ahash::AHashSet;

use crate::errors::{Result, SsaError};
use crate::shared::models::{Code, Function, OP_PHI, OP_UPSILON};

/// Check that `func` is in valid phi/upsilon SSA form
///
/// - No two instructions share a destination name
/// - Every upsilon writes into a phi that exists in the function
pub fn verify_ssa(func: &Function) -> Result<()> {
    let mut dests: AHashSet<&str> = AHashSet::new();
    let mut phis: AHashSet<&str> = AHashSet::new();

    for instr in func.instrs.iter().filter_map(Code::as_instruction) {
        if let Some(dest) = instr.dest.as_deref() {
            if !dests.insert(dest) {
                return Err(SsaError::internal(format!(
                    "renamer produced a non-unique name '{}' in function '{}'",
                    dest, func.name
                )));
            }
            if instr.op == OP_PHI {
                phis.insert(dest);
            }
        }
    }

    for instr in func.instrs.iter().filter_map(Code::as_instruction) {
        if instr.op != OP_UPSILON {
            continue;
        }
        let target = instr.args().first().and_then(|a| a.as_var());
        match target {
            Some(target) if phis.contains(target) => {}
            _ => {
                return Err(SsaError::internal(format!(
                    "upsilon in function '{}' writes to {:?}, which is not a phi",
                    func.name, target
                )))
            }
        }
    }

    Ok(())
}
