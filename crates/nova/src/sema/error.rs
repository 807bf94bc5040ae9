//! Semantic error records

use std::fmt;

/// Category of a semantic error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidName,
    Redeclaration,
    UndeclaredUse,
    IncompatibleAssignment,
    IncompatibleReturn,
    IncompatibleOperands,
    UnsupportedOperator,
    IncompleteControlStructure,
    IncompleteForStructure,
    UnclosedControlStructure,
    UnbalancedSymbols,
}

impl ErrorKind {
    /// Stable kebab-case code
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidName => "invalid-name",
            ErrorKind::Redeclaration => "redeclaration",
            ErrorKind::UndeclaredUse => "undeclared-use",
            ErrorKind::IncompatibleAssignment => "incompatible-assignment",
            ErrorKind::IncompatibleReturn => "incompatible-return",
            ErrorKind::IncompatibleOperands => "incompatible-operands",
            ErrorKind::UnsupportedOperator => "unsupported-operator",
            ErrorKind::IncompleteControlStructure => "incomplete-control-structure",
            ErrorKind::IncompleteForStructure => "incomplete-for-structure",
            ErrorKind::UnclosedControlStructure => "unclosed-control-structure",
            ErrorKind::UnbalancedSymbols => "unbalanced-symbols",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub message: String,
    /// 1-based line; 0 for whole-program conditions
    pub line: u32,
    pub kind: ErrorKind,
    pub variable: Option<String>,
}

impl SemanticError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: u32) -> Self {
        Self {
            message: message.into(),
            line,
            kind,
            variable: None,
        }
    }

    pub fn with_variable(mut self, name: impl Into<String>) -> Self {
        self.variable = Some(name.into());
        self
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: [{}] {}", self.line, self.kind, self.message)
    }
}
