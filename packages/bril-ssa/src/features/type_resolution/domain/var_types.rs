//! Per-function variable → type mapping

use indexmap::IndexMap;

use crate::shared::models::Type;

/// Declared type of every variable in one function
///
/// Iteration order is first appearance (parameters first, then
/// destinations in instruction order). Phi and upsilon layout follow this
/// order, so it must stay stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VarTypeMap {
    types: IndexMap<String, Type>,
}

impl VarTypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ty` for `var`, returning the type it replaced.
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, var: impl Into<String>, ty: Type) -> Option<Type> {
        self.types.insert(var.into(), ty)
    }

    pub fn get(&self, var: &str) -> Option<&Type> {
        self.types.get(var)
    }

    pub fn contains(&self, var: &str) -> bool {
        self.types.contains_key(var)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.types.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Type)> for VarTypeMap {
    fn from_iter<I: IntoIterator<Item = (S, Type)>>(iter: I) -> Self {
        let mut map = VarTypeMap::new();
        for (var, ty) in iter {
            map.insert(var, ty);
        }
        map
    }
}
