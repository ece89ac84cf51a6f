//! Basic block and named block map

use indexmap::IndexMap;

use crate::shared::models::Instruction;

/// Straight-line run of instructions with a single entry at the top
///
/// After terminator normalization the last instruction is the block's only
/// control transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub name: String,
    pub instrs: Vec<Instruction>,
}

impl Block {
    pub fn new(name: impl Into<String>, instrs: Vec<Instruction>) -> Self {
        Self {
            name: name.into(),
            instrs,
        }
    }

    pub fn terminator(&self) -> Option<&Instruction> {
        self.instrs.last().filter(|instr| instr.is_terminator())
    }

    pub fn is_empty(&self) -> bool {
        self.instrs.is_empty()
    }
}

/// Insertion-ordered name → block mapping with an explicit entry block
#[derive(Debug, Clone, PartialEq)]
pub struct BlockMap {
    entry: String,
    blocks: IndexMap<String, Block>,
}

impl BlockMap {
    /// Map with a single, empty entry block
    pub fn with_entry(entry: impl Into<String>) -> Self {
        let entry = entry.into();
        let mut blocks = IndexMap::new();
        blocks.insert(entry.clone(), Block::new(entry.clone(), Vec::new()));
        Self { entry, blocks }
    }

    /// Build from blocks in layout order; the first block is the entry.
    /// Returns `None` for an empty iterator.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Option<Self> {
        let blocks: IndexMap<String, Block> = blocks
            .into_iter()
            .map(|block| (block.name.clone(), block))
            .collect();
        let entry = blocks.keys().next()?.clone();
        Some(Self { entry, blocks })
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Insert `block` ahead of every other block and make it the entry
    pub fn push_front_entry(&mut self, block: Block) {
        self.entry = block.name.clone();
        self.blocks.shift_insert(0, block.name.clone(), block);
    }

    pub fn get(&self, name: &str) -> Option<&Block> {
        self.blocks.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Block> {
        self.blocks.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.keys().map(String::as_str)
    }

    /// Name of the block at layout position `index`
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.blocks.get_index(index).map(|(name, _)| name.as_str())
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    pub fn blocks_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        self.blocks.values_mut()
    }

    pub fn into_blocks(self) -> impl Iterator<Item = Block> {
        self.blocks.into_values()
    }
}
