//! Bril instructions, labels, operands and types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Spelling of [`Operand::Undefined`] at the JSON boundary
pub const UNDEF_SENTINEL: &str = "undef";

/// Block-entry read pseudo-op
pub const OP_PHI: &str = "phi";
/// Predecessor-side write pseudo-op
pub const OP_UPSILON: &str = "upsilon";

pub const OP_JMP: &str = "jmp";
pub const OP_BR: &str = "br";
pub const OP_RET: &str = "ret";

/// Control-transfer ops
pub const TERMINATORS: [&str; 3] = [OP_JMP, OP_BR, OP_RET];

/// Bril type
///
/// Either a primitive (`"int"`, `"bool"`, ...) or a parameterized pointer
/// type (`{"ptr": "int"}`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Type {
    Primitive(String),
    Pointer { ptr: Box<Type> },
}

impl Type {
    pub fn primitive(name: impl Into<String>) -> Self {
        Type::Primitive(name.into())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(name) => write!(f, "{}", name),
            Type::Pointer { ptr } => write!(f, "ptr<{}>", ptr),
        }
    }
}

/// Instruction argument
///
/// `Undefined` never comes from input; it is produced by the entry bootstrap
/// for variables that are not function parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Var(String),
    Undefined,
}

impl Operand {
    pub fn var(name: impl Into<String>) -> Self {
        Operand::Var(name.into())
    }

    pub fn as_var(&self) -> Option<&str> {
        match self {
            Operand::Var(name) => Some(name),
            Operand::Undefined => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Var(name) => write!(f, "{}", name),
            Operand::Undefined => write!(f, "{}", UNDEF_SENTINEL),
        }
    }
}

impl Serialize for Operand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Operand::Var(name) => serializer.serialize_str(name),
            Operand::Undefined => serializer.serialize_str(UNDEF_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Operand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Operand::Var)
    }
}

/// A single Bril instruction
///
/// Fields this crate does not interpret (`value`, `pos`, ...) are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub op: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<Type>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<Operand>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funcs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Instruction {
    pub fn new(op: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            dest: None,
            ty: None,
            args: None,
            funcs: None,
            labels: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_dest(mut self, dest: impl Into<String>, ty: Type) -> Self {
        self.dest = Some(dest.into());
        self.ty = Some(ty);
        self
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(|a| Operand::Var(a.into())).collect());
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.extra.insert("value".to_string(), value);
        self
    }

    /// `dest: ty = phi`
    pub fn phi(dest: impl Into<String>, ty: Type) -> Self {
        Self::new(OP_PHI).with_dest(dest, ty)
    }

    /// `upsilon target source`
    pub fn upsilon(target: impl Into<String>, source: Operand) -> Self {
        let mut instr = Self::new(OP_UPSILON);
        instr.args = Some(vec![Operand::Var(target.into()), source]);
        instr
    }

    pub fn jmp(target: impl Into<String>) -> Self {
        Self::new(OP_JMP).with_labels([target])
    }

    /// Bare `ret` with an empty argument list
    pub fn ret() -> Self {
        let mut instr = Self::new(OP_RET);
        instr.args = Some(Vec::new());
        instr
    }

    pub fn is_terminator(&self) -> bool {
        TERMINATORS.contains(&self.op.as_str())
    }

    pub fn args(&self) -> &[Operand] {
        self.args.as_deref().unwrap_or(&[])
    }

    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or(&[])
    }
}

/// A label marker in a flat instruction stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub label: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Label {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// One entry of a function's `instrs` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    Instruction(Instruction),
    Label(Label),
}

impl Code {
    pub fn as_instruction(&self) -> Option<&Instruction> {
        match self {
            Code::Instruction(instr) => Some(instr),
            Code::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&str> {
        match self {
            Code::Label(label) => Some(&label.label),
            Code::Instruction(_) => None,
        }
    }
}

impl From<Instruction> for Code {
    fn from(instr: Instruction) -> Self {
        Code::Instruction(instr)
    }
}

impl From<Label> for Code {
    fn from(label: Label) -> Self {
        Code::Label(label)
    }
}
