/*
 * Block-Local SSA Renaming
 *
 * Rewrites one block into SSA-local form with phi/upsilon pairs:
 *
 *   [phi v_B0 for every tracked v]
 *   [body, every def of v renamed v_B1, v_B2, ...; every use reads the
 *    current version]
 *   [upsilon v_S0 <- v_Bk for every successor S, every tracked v]
 *   [terminator]
 *
 * Non-minimal by construction: every tracked variable gets a phi in every
 * block and an upsilon on every edge. No liveness or dominance is needed,
 * and blocks can be renamed in any order because they only refer to each
 * other by name.
 */

use ahash::AHashMap;

use crate::errors::{Result, SsaError};
use crate::features::flow_graph::domain::Block;
use crate::features::ssa::domain::NameTable;
use crate::features::type_resolution::domain::VarTypeMap;
use crate::shared::models::{Instruction, Operand};

/// Per-block definition counters; 0 means "value at block entry"
type Versions<'a> = AHashMap<&'a str, u32>;

/// Rename `block` in place and insert its phi/upsilon instructions
///
/// # Arguments
/// * `block` - block to rewrite; must end in a terminator
/// * `succ_names` - distinct successor block names, in terminator order
/// * `var_types` - tracked variables and their types
/// * `names` - the function's local name table
///
/// # Errors
///
/// `MalformedIr` if the block has no terminator, or an instruction reads or
/// writes a variable that `var_types` does not track.
pub fn rename_block(
    block: &mut Block,
    succ_names: &[String],
    var_types: &VarTypeMap,
    names: &mut NameTable,
) -> Result<()> {
    if block.terminator().is_none() {
        return Err(SsaError::malformed(format!(
            "block '{}' does not end in a terminator",
            block.name
        )));
    }

    let block_name = block.name.clone();
    let mut body = std::mem::take(&mut block.instrs);
    let Some(mut terminator) = body.pop() else {
        return Err(SsaError::malformed(format!("block '{}' is empty", block_name)));
    };

    let mut versions: Versions<'_> = var_types.names().map(|var| (var, 0)).collect();

    for instr in body.iter_mut() {
        rewrite_instruction(instr, &block_name, &mut versions, names)?;
    }
    rewrite_instruction(&mut terminator, &block_name, &mut versions, names)?;

    let tracked = var_types.len();
    let mut rebuilt =
        Vec::with_capacity(tracked + body.len() + succ_names.len() * tracked + 1);

    for (var, ty) in var_types.iter() {
        let dest = names.local_name(&block_name, var, 0);
        rebuilt.push(Instruction::phi(dest, ty.clone()));
    }

    rebuilt.append(&mut body);

    for succ in succ_names {
        for var in var_types.names() {
            let current = versions.get(var).copied().unwrap_or(0);
            let target = names.local_name(succ, var, 0);
            let source = names.local_name(&block_name, var, current);
            rebuilt.push(Instruction::upsilon(target, Operand::Var(source)));
        }
    }

    rebuilt.push(terminator);
    block.instrs = rebuilt;

    tracing::trace!(
        "Renamed block '{}': {} phis, {} upsilons",
        block_name,
        tracked,
        succ_names.len() * tracked
    );

    Ok(())
}

/// Rename uses to the current version, then bump and rename the def
fn rewrite_instruction(
    instr: &mut Instruction,
    block: &str,
    versions: &mut Versions<'_>,
    names: &mut NameTable,
) -> Result<()> {
    if let Some(args) = instr.args.as_mut() {
        for arg in args.iter_mut() {
            let Operand::Var(var) = arg else {
                continue;
            };
            let current = versions.get(var.as_str()).copied().ok_or_else(|| {
                SsaError::malformed(format!(
                    "'{}' in block '{}' reads '{}', which has no known type",
                    instr.op, block, var
                ))
            })?;
            let renamed = names.local_name(block, var.as_str(), current);
            *var = renamed;
        }
    }

    if let Some(dest) = instr.dest.as_mut() {
        let counter = versions.get_mut(dest.as_str()).ok_or_else(|| {
            SsaError::malformed(format!(
                "'{}' in block '{}' defines '{}', which has no known type",
                instr.op, block, dest
            ))
        })?;
        *counter += 1;
        let renamed = names.local_name(block, dest.as_str(), *counter);
        *dest = renamed;
    }

    Ok(())
}
