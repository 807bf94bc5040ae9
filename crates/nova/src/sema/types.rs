//! Nova data types and compatibility rules

use std::fmt;

use crate::lexer::TokenKind;

/// Primitive value category of a variable or expression operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    Integer,
    Float,
    Boolean,
    String,
    Char,
    /// No information available; never the cause of an error
    #[default]
    Unknown,
}

impl DataType {
    /// Type named by a type keyword (`int` -> `Integer`, ...)
    pub fn from_type_keyword(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::TypeInt => Some(DataType::Integer),
            TokenKind::TypeFloat => Some(DataType::Float),
            TokenKind::TypeString => Some(DataType::String),
            TokenKind::TypeChar => Some(DataType::Char),
            TokenKind::TypeBool => Some(DataType::Boolean),
            _ => None,
        }
    }

    /// Type of a literal token, `Unknown` for anything else
    pub fn of_literal(kind: TokenKind) -> Self {
        match kind {
            TokenKind::IntLiteral => DataType::Integer,
            TokenKind::FloatLiteral => DataType::Float,
            TokenKind::StringLiteral => DataType::String,
            TokenKind::CharLiteral => DataType::Char,
            TokenKind::True | TokenKind::False => DataType::Boolean,
            _ => DataType::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != DataType::Unknown
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::String => "string",
            DataType::Char => "char",
            DataType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check if a value of type `source` may flow into `target`.
///
/// Identical types are compatible, as are the widenings float <- integer
/// and string <- char.
pub fn is_compatible(target: DataType, source: DataType) -> bool {
    target == source
        || matches!(
            (target, source),
            (DataType::Float, DataType::Integer) | (DataType::String, DataType::Char)
        )
}

/// Like [`is_compatible`] but only `true` when both types are known and clash
pub fn is_conflict(target: DataType, source: DataType) -> bool {
    target.is_known() && source.is_known() && !is_compatible(target, source)
}
