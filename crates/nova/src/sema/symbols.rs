//! Symbol table for one analysis run

use std::collections::HashMap;

use super::types::DataType;

/// A named value observed in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub ty: DataType,
    /// Raw text of the last accepted right-hand side
    pub value: Option<String>,
    /// Line of first occurrence
    pub line: u32,
    pub is_declared: bool,
    pub is_valid_name: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, line: u32, is_valid_name: bool) -> Self {
        Self {
            name: name.into(),
            ty: DataType::Unknown,
            value: None,
            line,
            is_declared: false,
            is_valid_name,
        }
    }
}

/// Variables keyed by name, kept in order of first sight
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: Vec<Variable>,
    index: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `variable` unless its name is already known.
    ///
    /// Returns `true` when the variable was inserted.
    pub fn insert(&mut self, variable: Variable) -> bool {
        if self.index.contains_key(&variable.name) {
            return false;
        }
        self.index.insert(variable.name.clone(), self.variables.len());
        self.variables.push(variable);
        true
    }

    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&i| &self.variables[i])
    }

    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.index.get(name).map(|&i| &mut self.variables[i])
    }

    /// Declared type of `name`, `Unknown` if never declared
    pub fn type_of(&self, name: &str) -> DataType {
        self.lookup(name).map_or(DataType::Unknown, |v| v.ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn into_variables(self) -> Vec<Variable> {
        self.variables
    }
}
