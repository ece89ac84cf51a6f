//! Bril program and function models
//!
//! Reading accepts the canonical JSON form. Writing goes through
//! `serde_json::Value` so object keys come out sorted, which keeps the
//! output byte-for-byte reproducible.

use serde::{Deserialize, Serialize};
use std::io::Read;

use super::instruction::{Code, Type};
use crate::errors::Result;

/// Function parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: Type,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Argument>>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Type>,

    #[serde(default)]
    pub instrs: Vec<Code>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: None,
            return_type: None,
            instrs: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn args(&self) -> &[Argument] {
        self.args.as_deref().unwrap_or(&[])
    }

    pub fn is_parameter(&self, name: &str) -> bool {
        self.args().iter().any(|a| a.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub functions: Vec<Function>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Program {
    pub fn new(functions: Vec<Function>) -> Self {
        Self {
            functions,
            extra: serde_json::Map::new(),
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::from_json_str(&source)
    }

    /// Pretty-printed JSON with sorted keys and two-space indentation
    pub fn to_pretty_json(&self) -> Result<String> {
        let value = serde_json::to_value(self)?;
        Ok(serde_json::to_string_pretty(&value)?)
    }
}
