/*
 * CFG Builder
 *
 * Turns formed blocks into a well-behaved control flow graph:
 * - Every block gets a unique name (its label, or a fresh one)
 * - The entry block has no predecessors (a fresh one is added if needed)
 * - Every block ends in exactly one terminator
 *
 * Successor lists are derived from terminators, never stored.
 */

use ahash::AHashSet;
use indexmap::IndexMap;

use crate::errors::{Result, SsaError};
use crate::features::flow_graph::domain::{Block, BlockMap};
use crate::shared::models::{Code, Instruction, Label, OP_BR, OP_JMP, OP_RET};

/// Seed for a synthesized entry block name
pub const ENTRY_SEED: &str = "entry";

/// Seed for names of unlabeled non-entry blocks
pub const BLOCK_SEED: &str = "b";

/// `seed` if unused, otherwise `seed1`, `seed2`, ...
fn fresh_name(seed: &str, taken: &AHashSet<String>) -> String {
    if !taken.contains(seed) {
        return seed.to_string();
    }
    let mut i = 1usize;
    loop {
        let candidate = format!("{}{}", seed, i);
        if !taken.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

/// Like [`fresh_name`] but always numbered (`b1`, `b2`, ...)
fn fresh_numbered(seed: &str, taken: &AHashSet<String>) -> String {
    let mut i = 1usize;
    loop {
        let candidate = format!("{}{}", seed, i);
        if !taken.contains(&candidate) {
            return candidate;
        }
        i += 1;
    }
}

/// Name every formed block and collect them into a [`BlockMap`]
///
/// Fresh names never collide with a label that appears later in the
/// function. A function with no code gets a single empty entry block.
///
/// # Errors
///
/// `MalformedIr` if two blocks carry the same label, or an instruction
/// targets a label that does not appear in the input.
pub fn block_map(blocks: Vec<Vec<Code>>) -> Result<BlockMap> {
    let mut taken: AHashSet<String> = blocks
        .iter()
        .filter_map(|block| block.first().and_then(Code::as_label))
        .map(str::to_string)
        .collect();

    // Fresh names are not valid targets
    for instr in blocks.iter().flatten().filter_map(Code::as_instruction) {
        if let Some(missing) = instr.labels().iter().find(|l| !taken.contains(l.as_str())) {
            return Err(SsaError::malformed(format!(
                "'{}' targets unknown label '{}'",
                instr.op, missing
            )));
        }
    }

    let mut named = Vec::with_capacity(blocks.len());
    let mut seen: AHashSet<String> = AHashSet::new();

    for (index, block) in blocks.into_iter().enumerate() {
        let mut codes = block.into_iter().peekable();

        let label = match codes.peek() {
            Some(Code::Label(label)) => Some(label.label.clone()),
            _ => None,
        };
        let name = match label {
            Some(name) => {
                codes.next();
                name
            }
            None if index == 0 => fresh_name(ENTRY_SEED, &taken),
            None => fresh_numbered(BLOCK_SEED, &taken),
        };

        if !seen.insert(name.clone()) {
            return Err(SsaError::malformed(format!("duplicate label '{}'", name)));
        }
        taken.insert(name.clone());

        let mut instrs = Vec::new();
        for code in codes {
            match code {
                Code::Instruction(instr) => instrs.push(instr),
                Code::Label(label) => {
                    return Err(SsaError::malformed(format!(
                        "label '{}' in the middle of block '{}'",
                        label.label, name
                    )))
                }
            }
        }

        named.push(Block::new(name, instrs));
    }

    Ok(BlockMap::from_blocks(named).unwrap_or_else(|| BlockMap::with_entry(ENTRY_SEED)))
}

/// Ensure the entry block has no incoming edges
///
/// If any instruction targets the current entry, a fresh empty block is
/// placed in front of it and becomes the new entry.
pub fn add_entry(blocks: &mut BlockMap) {
    let entry = blocks.entry().to_string();
    let referenced = blocks
        .blocks()
        .flat_map(|block| block.instrs.iter())
        .any(|instr| instr.labels().iter().any(|l| *l == entry));

    if !referenced {
        return;
    }

    let taken: AHashSet<String> = blocks.names().map(str::to_string).collect();
    let name = fresh_name(ENTRY_SEED, &taken);
    tracing::debug!("Entry block '{}' has predecessors, adding '{}'", entry, name);
    blocks.push_front_entry(Block::new(name, Vec::new()));
}

/// Ensure every block ends in a terminator
///
/// Blocks that fall through get an explicit `jmp` to the next block in
/// layout order; the last block gets a `ret`.
pub fn add_terminators(blocks: &mut BlockMap) {
    let names: Vec<String> = blocks.names().map(str::to_string).collect();

    for (index, name) in names.iter().enumerate() {
        let next = names.get(index + 1);
        if let Some(block) = blocks.get_mut(name) {
            if block.terminator().is_some() {
                continue;
            }
            let terminator = match next {
                Some(next) => Instruction::jmp(next.clone()),
                None => Instruction::ret(),
            };
            block.instrs.push(terminator);
        }
    }
}

/// Successor block names of a terminator, in order, each listed once
///
/// # Errors
///
/// `MalformedIr` if `instr` is not a terminator, or is a jump/branch
/// without targets.
pub fn successors(instr: &Instruction) -> Result<Vec<String>> {
    match instr.op.as_str() {
        OP_JMP | OP_BR => match &instr.labels {
            Some(labels) if !labels.is_empty() => {
                let mut seen = AHashSet::with_capacity(labels.len());
                Ok(labels
                    .iter()
                    .filter(|l| seen.insert(l.as_str()))
                    .cloned()
                    .collect())
            }
            _ => Err(SsaError::malformed(format!(
                "'{}' without target labels",
                instr.op
            ))),
        },
        OP_RET => Ok(Vec::new()),
        other => Err(SsaError::malformed(format!("'{}' is not a terminator", other))),
    }
}

/// Successor names for every block, in block order
///
/// # Errors
///
/// `MalformedIr` if a block lacks a terminator or targets an unknown block.
pub fn successor_map(blocks: &BlockMap) -> Result<IndexMap<String, Vec<String>>> {
    let mut succs = IndexMap::with_capacity(blocks.len());
    for block in blocks.blocks() {
        let terminator = block.terminator().ok_or_else(|| {
            SsaError::malformed(format!("block '{}' has no terminator", block.name))
        })?;
        let targets = successors(terminator)?;
        if let Some(missing) = targets.iter().find(|t| !blocks.contains(t)) {
            return Err(SsaError::malformed(format!(
                "block '{}' jumps to unknown block '{}'",
                block.name, missing
            )));
        }
        succs.insert(block.name.clone(), targets);
    }
    Ok(succs)
}

/// Flatten a block map back into a label-annotated instruction list
pub fn reassemble(blocks: BlockMap) -> Vec<Code> {
    let mut instrs = Vec::new();
    for block in blocks.into_blocks() {
        instrs.push(Code::Label(Label::new(block.name)));
        instrs.extend(block.instrs.into_iter().map(Code::Instruction));
    }
    instrs
}
