/*
 * Basic Block Formation
 *
 * Splits a flat Bril instruction list into basic blocks:
 * - A label always starts a new block (and stays as its first item)
 * - A terminator (jmp/br/ret) always ends the current block
 *
 * Blocks are still unnamed here; naming happens in the CFG builder.
 */

use crate::shared::models::Code;

/// Split `instrs` into basic blocks
pub fn form_blocks(instrs: Vec<Code>) -> Vec<Vec<Code>> {
    let mut blocks = Vec::new();
    let mut current: Vec<Code> = Vec::new();

    for code in instrs {
        match &code {
            Code::Instruction(instr) => {
                let ends_block = instr.is_terminator();
                current.push(code);
                if ends_block {
                    blocks.push(std::mem::take(&mut current));
                }
            }
            Code::Label(_) => {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
                current.push(code);
            }
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}
