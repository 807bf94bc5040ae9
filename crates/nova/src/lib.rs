//! Nova Analyzer - lexer, line validator and semantic analyzer for Nova
//!
//! Nova is a small C-like teaching language. The analyzer never executes or
//! compiles it; it reports what is wrong with a source snapshot.
//!
//! ## Architecture
//!
//! The analyzer is organized into:
//! - **Lexer** (`lexer/`): Total tokenizer, unrecognized input becomes error tokens
//! - **Lines** (`lines`): Tokens grouped by source line
//! - **Syntax** (`syntax/`): Per-line validation against a statement catalog
//! - **Sema** (`sema/`): Symbol table, type checks, bracket and structure balance
//! - **Driver** (`driver/`): Configuration and the full pipeline
//! - **Report** (`report`): Plain-text tables and the token export
//! - **Common** (`common/`): Shared infrastructure (errors, spans, diagnostics)

pub mod common;
pub mod lexer;
pub mod lines;
pub mod syntax;
pub mod sema;
pub mod driver;
pub mod report;

// Re-exports for convenience
pub use common::{AnalysisError, AnalysisResult, DiagnosticReporter, Span};
pub use lexer::{tokenize, Token, TokenKind};
pub use lines::{group_by_line, LineGroup};
pub use syntax::{validate_line, validate_lines, SyntaxResult};
pub use sema::{analyze, SemanticAnalyzer, SemanticReport};
pub use driver::{Analysis, AnalyzerConfig, Pipeline};
