//! Per-line structural validation

use super::rules::find_rule;
use crate::lexer::{Token, TokenKind};
use crate::lines::LineGroup;

/// Message attached to lines no rule accepts
pub const UNRECOGNIZED_STRUCTURE: &str = "unrecognized structure";

/// Outcome of validating one source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxResult {
    pub line: u32,
    pub valid: bool,
    pub message: Option<String>,
}

impl SyntaxResult {
    pub fn valid(line: u32) -> Self {
        Self {
            line,
            valid: true,
            message: None,
        }
    }

    pub fn invalid(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            valid: false,
            message: Some(message.into()),
        }
    }
}

/// Line shapes accepted by their leading tokens alone.
///
/// These bypass the rule catalog, so a malformed condition behind an `if`
/// is still reported valid.
fn is_special_case(kinds: &[TokenKind]) -> bool {
    match kinds {
        [TokenKind::Output, ..] => true,
        [ty, TokenKind::Identifier, ..] if ty.is_type_keyword() => true,
        [TokenKind::Identifier, TokenKind::Assign, ..] => true,
        [
            TokenKind::If | TokenKind::Else | TokenKind::For | TokenKind::While | TokenKind::Do,
            ..,
        ] => true,
        [TokenKind::Function, ..] => true,
        [TokenKind::Return, ..] => true,
        // Lone braces, `} else`, `} else if (...) {` and `} while (...);`
        [TokenKind::LBrace | TokenKind::RBrace, ..] => true,
        _ => false,
    }
}

/// Validate the tokens of a single line
pub fn validate_line(tokens: &[Token]) -> SyntaxResult {
    let line = tokens.first().map_or(0, |t| t.line);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();

    if is_special_case(&kinds) || find_rule(&kinds).is_some() {
        SyntaxResult::valid(line)
    } else {
        SyntaxResult::invalid(line, UNRECOGNIZED_STRUCTURE)
    }
}

/// Validate every line of a grouped stream, in ascending line order
pub fn validate_lines(group: &LineGroup) -> Vec<SyntaxResult> {
    group
        .iter()
        .map(|(line, tokens)| SyntaxResult {
            line,
            ..validate_line(tokens)
        })
        .collect()
}
