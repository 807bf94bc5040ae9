//! Semantic analysis module
//!
//! Builds the symbol table, checks names and types, and verifies bracket
//! and control-structure balance over the flat token stream.

mod analyzer;
mod balance;
mod error;
mod symbols;
mod types;

pub use analyzer::{analyze, SemanticAnalyzer, SemanticReport, DEFAULT_NAME_PREFIX};
pub use balance::{ControlBalanceEntry, ControlKind, SymbolBalanceEntry, SymbolClass};
pub use error::{ErrorKind, SemanticError};
pub use symbols::{SymbolTable, Variable};
pub use types::{is_compatible, DataType};
