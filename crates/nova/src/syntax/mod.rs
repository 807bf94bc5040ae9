//! Syntax validation module
//!
//! Each source line is checked on its own against a fixed catalog of
//! statement shapes. No tree is built.

mod rules;
mod validator;

pub use rules::{find_rule, SyntaxRule, SYNTAX_RULES};
pub use validator::{validate_line, validate_lines, SyntaxResult, UNRECOGNIZED_STRUCTURE};
