//! Structured SSA local names
//!
//! A local name is the triple (block, variable, version). Version 0 is the
//! value visible at block entry (the phi destination); version `i >= 1` is
//! the value produced by the i-th definition of the variable in that block.
//!
//! The triple is the identity. Text is only produced at the boundary, via
//! [`NameTable`], which guarantees that distinct triples never render to the
//! same string and never shadow an original variable name.

use ahash::{AHashMap, AHashSet};
use indexmap::IndexSet;
use std::fmt;

/// Interned block name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u32);

/// Interned variable name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalName {
    pub block: BlockId,
    pub var: VarId,
    pub version: u32,
}

impl LocalName {
    /// True for the block-entry (phi) slot
    pub fn is_entry_slot(&self) -> bool {
        self.version == 0
    }
}

impl fmt::Display for LocalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.block.0, self.var.0, self.version)
    }
}

/// Per-function index table for local names
#[derive(Debug, Default)]
pub struct NameTable {
    blocks: IndexSet<String>,
    vars: IndexSet<String>,
    rendered: AHashMap<LocalName, String>,
    by_text: AHashMap<String, LocalName>,
    reserved: AHashSet<String>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table whose renderings avoid every name in `reserved`
    pub fn with_reserved<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved: reserved.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn block_id(&mut self, block: &str) -> BlockId {
        let (index, _) = self.blocks.insert_full(block.to_string());
        BlockId(index as u32)
    }

    pub fn var_id(&mut self, var: &str) -> VarId {
        let (index, _) = self.vars.insert_full(var.to_string());
        VarId(index as u32)
    }

    pub fn block_name(&self, id: BlockId) -> Option<&str> {
        self.blocks.get_index(id.0 as usize).map(String::as_str)
    }

    pub fn var_name(&self, id: VarId) -> Option<&str> {
        self.vars.get_index(id.0 as usize).map(String::as_str)
    }

    pub fn key(&mut self, block: &str, var: &str, version: u32) -> LocalName {
        LocalName {
            block: self.block_id(block),
            var: self.var_id(var),
            version,
        }
    }

    /// Text for `key`, stable for the lifetime of the table
    ///
    /// The preferred spelling is `{var}_{block}{version}`; a `.N` suffix is
    /// added only when that spelling is already taken.
    pub fn render(&mut self, key: LocalName) -> String {
        if let Some(text) = self.rendered.get(&key) {
            return text.clone();
        }

        let var = self.var_name(key.var).unwrap_or_default();
        let block = self.block_name(key.block).unwrap_or_default();
        let preferred = format!("{}_{}{}", var, block, key.version);

        let text = if self.is_free(&preferred) {
            preferred
        } else {
            let mut n = 1usize;
            loop {
                let candidate = format!("{}.{}", preferred, n);
                if self.is_free(&candidate) {
                    break candidate;
                }
                n += 1;
            }
        };

        self.rendered.insert(key, text.clone());
        self.by_text.insert(text.clone(), key);
        text
    }

    /// Shorthand for `render(key(block, var, version))`
    pub fn local_name(&mut self, block: &str, var: &str, version: u32) -> String {
        let key = self.key(block, var, version);
        self.render(key)
    }

    /// Reverse lookup of a rendered name
    pub fn resolve(&self, text: &str) -> Option<LocalName> {
        self.by_text.get(text).copied()
    }

    /// Number of rendered names
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    fn is_free(&self, text: &str) -> bool {
        !self.reserved.contains(text) && !self.by_text.contains_key(text)
    }
}
