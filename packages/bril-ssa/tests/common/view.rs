//! Block-level view of a converted function
//!
//! Splits the flat output back into the entry prelude and labeled blocks so
//! assertions can talk about "the phis of block B" or "the upsilons on edge
//! B -> S".

use bril_ssa::shared::models::{Code, Function, Instruction, OP_PHI, OP_UPSILON};

#[derive(Debug, Clone)]
pub struct BlockView {
    pub name: String,
    pub instrs: Vec<Instruction>,
}

impl BlockView {
    pub fn phis(&self) -> Vec<&Instruction> {
        self.instrs.iter().filter(|i| i.op == OP_PHI).collect()
    }

    pub fn upsilons(&self) -> Vec<&Instruction> {
        self.instrs.iter().filter(|i| i.op == OP_UPSILON).collect()
    }

    pub fn terminator(&self) -> &Instruction {
        self.instrs.last().expect("block has a terminator")
    }

    /// Distinct successor names, in terminator order
    pub fn successors(&self) -> Vec<&str> {
        let mut succs: Vec<&str> = Vec::new();
        for label in self.terminator().labels() {
            if !succs.contains(&label.as_str()) {
                succs.push(label);
            }
        }
        succs
    }

    /// Upsilons whose target is `target`
    pub fn upsilons_into(&self, target: &str) -> Vec<(usize, &Instruction)> {
        self.instrs
            .iter()
            .enumerate()
            .filter(|(_, i)| i.op == OP_UPSILON)
            .filter(|(_, i)| i.args()[0].as_var() == Some(target))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct FunctionView {
    pub prelude: Vec<Instruction>,
    pub blocks: Vec<BlockView>,
}

impl FunctionView {
    pub fn of(func: &Function) -> Self {
        let mut prelude = Vec::new();
        let mut blocks: Vec<BlockView> = Vec::new();

        for code in &func.instrs {
            match code {
                Code::Label(label) => blocks.push(BlockView {
                    name: label.label.clone(),
                    instrs: Vec::new(),
                }),
                Code::Instruction(instr) => match blocks.last_mut() {
                    Some(block) => block.instrs.push(instr.clone()),
                    None => prelude.push(instr.clone()),
                },
            }
        }

        Self { prelude, blocks }
    }

    pub fn block(&self, name: &str) -> &BlockView {
        self.blocks
            .iter()
            .find(|b| b.name == name)
            .unwrap_or_else(|| panic!("no block named '{}'", name))
    }

    pub fn entry(&self) -> &BlockView {
        self.blocks.first().expect("function has an entry block")
    }

    pub fn block_names(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.name.as_str()).collect()
    }
}

/// `{var}_{block}{version}`, the rendering used when nothing collides
pub fn local(block: &str, var: &str, version: u32) -> String {
    format!("{}_{}{}", var, block, version)
}
