//! Grouping of the token stream by source line

use std::collections::BTreeMap;

use crate::lexer::Token;

/// Tokens keyed by their 1-based source line.
///
/// Only lines holding at least one token are present. Iteration is in
/// ascending line order, so flattening reproduces the original stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGroup {
    lines: BTreeMap<u32, Vec<Token>>,
}

impl LineGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.lines.entry(token.line).or_default().push(token);
    }

    pub fn get(&self, line: u32) -> Option<&[Token]> {
        self.lines.get(&line).map(Vec::as_slice)
    }

    /// `(line, tokens)` pairs in ascending line order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Token])> {
        self.lines.iter().map(|(line, tokens)| (*line, tokens.as_slice()))
    }

    /// Number of non-empty lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Concatenate every line back into a single stream
    pub fn flatten(&self) -> Vec<Token> {
        self.lines.values().flatten().cloned().collect()
    }
}

impl FromIterator<Token> for LineGroup {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut group = Self::new();
        for token in iter {
            group.push(token);
        }
        group
    }
}

/// Partition a token stream into per-line sequences, preserving order
pub fn group_by_line(tokens: &[Token]) -> LineGroup {
    tokens.iter().cloned().collect()
}
