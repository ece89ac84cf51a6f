/*
 * Function-Level SSA Conversion
 *
 * Pipeline per function:
 *   1. Infer variable types
 *   2. Form blocks, name them, add an entry block and terminators
 *   3. Rename every block (phi/upsilon insertion)
 *   4. Reassemble into a flat, labeled instruction list
 *   5. Prepend the entry bootstrap: one upsilon per tracked variable that
 *      feeds the entry block's phi from the parameter of the same name, or
 *      from `undef` when there is no such parameter
 */

use crate::errors::Result;
use crate::features::flow_graph::infrastructure::{
    add_entry, add_terminators, block_map, form_blocks, reassemble, successor_map,
};
use crate::features::ssa::domain::NameTable;
use crate::features::type_resolution::domain::VarTypeMap;
use crate::features::type_resolution::infrastructure::infer_var_types;
use crate::shared::models::{Code, Function, Instruction, Operand};

use super::block_renamer::rename_block;

/// Convert `func` to phi/upsilon SSA form
///
/// # Errors
///
/// `MalformedIr` if the function violates a precondition (untyped
/// destination, use of an unknown variable, duplicate label, jump to an
/// unknown block).
pub fn func_to_ssa(mut func: Function) -> Result<Function> {
    let var_types = infer_var_types(&func)?;

    let instrs = std::mem::take(&mut func.instrs);
    let mut blocks = block_map(form_blocks(instrs))?;
    add_entry(&mut blocks);
    add_terminators(&mut blocks);
    let succs = successor_map(&blocks)?;

    let mut names = NameTable::with_reserved(var_types.names());

    for block in blocks.blocks_mut() {
        let succ_names = succs.get(&block.name).map(Vec::as_slice).unwrap_or(&[]);
        rename_block(block, succ_names, &var_types, &mut names)?;
    }

    let entry = blocks.entry().to_string();
    let block_count = blocks.len();
    let body = reassemble(blocks);

    let prelude = entry_prelude(&func, &entry, &var_types, &mut names);
    let mut instrs: Vec<Code> = Vec::with_capacity(prelude.len() + body.len());
    instrs.extend(prelude.into_iter().map(Code::Instruction));
    instrs.extend(body);
    func.instrs = instrs;

    tracing::debug!(
        "Converted function '{}' to SSA: {} blocks, {} variables, {} local names",
        func.name,
        block_count,
        var_types.len(),
        names.len()
    );

    Ok(func)
}

/// Upsilons that seed the entry block's phis, in variable order
pub fn entry_prelude(
    func: &Function,
    entry: &str,
    var_types: &VarTypeMap,
    names: &mut NameTable,
) -> Vec<Instruction> {
    var_types
        .names()
        .map(|var| {
            let target = names.local_name(entry, var, 0);
            let source = if func.is_parameter(var) {
                Operand::var(var)
            } else {
                Operand::Undefined
            };
            Instruction::upsilon(target, source)
        })
        .collect()
}
