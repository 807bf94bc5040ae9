//! Bracket and control-structure balance tracking

use std::fmt;

use crate::lexer::TokenKind;

/// Bracket family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolClass {
    Brace,
    Paren,
    Bracket,
}

impl SymbolClass {
    pub const ALL: [SymbolClass; 3] = [SymbolClass::Brace, SymbolClass::Paren, SymbolClass::Bracket];

    /// Class of an opening bracket token
    pub fn opened_by(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::LBrace => Some(SymbolClass::Brace),
            TokenKind::LParen => Some(SymbolClass::Paren),
            TokenKind::LBracket => Some(SymbolClass::Bracket),
            _ => None,
        }
    }

    /// Class of a closing bracket token
    pub fn closed_by(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::RBrace => Some(SymbolClass::Brace),
            TokenKind::RParen => Some(SymbolClass::Paren),
            TokenKind::RBracket => Some(SymbolClass::Bracket),
            _ => None,
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            SymbolClass::Brace => "braces",
            SymbolClass::Paren => "parens",
            SymbolClass::Bracket => "brackets",
        }
    }
}

impl fmt::Display for SymbolClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SymbolClass::Brace => "brace",
            SymbolClass::Paren => "paren",
            SymbolClass::Bracket => "bracket",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolBalanceEntry {
    pub class: SymbolClass,
    pub opened: u32,
    pub closed: u32,
}

impl SymbolBalanceEntry {
    pub fn is_balanced(&self) -> bool {
        self.opened == self.closed
    }
}

/// Keyword-introduced block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    If,
    Else,
    ElseIf,
    For,
    While,
    Do,
    Function,
}

impl ControlKind {
    pub const ALL: [ControlKind; 7] = [
        ControlKind::If,
        ControlKind::Else,
        ControlKind::ElseIf,
        ControlKind::For,
        ControlKind::While,
        ControlKind::Do,
        ControlKind::Function,
    ];

    /// Structure introduced by a keyword token. `else if` is resolved by
    /// the caller since it spans two tokens.
    pub fn from_keyword(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::If => Some(ControlKind::If),
            TokenKind::Else => Some(ControlKind::Else),
            TokenKind::For => Some(ControlKind::For),
            TokenKind::While => Some(ControlKind::While),
            TokenKind::Do => Some(ControlKind::Do),
            TokenKind::Function => Some(ControlKind::Function),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ControlKind::If => "if",
            ControlKind::Else => "else",
            ControlKind::ElseIf => "elseif",
            ControlKind::For => "for",
            ControlKind::While => "while",
            ControlKind::Do => "do",
            ControlKind::Function => "function",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBalanceEntry {
    pub kind: ControlKind,
    pub occurrences: u32,
    /// Occurrences never closed by a `}`
    pub unclosed: u32,
    pub used: bool,
}

impl ControlBalanceEntry {
    pub fn closed(&self) -> u32 {
        self.occurrences - self.unclosed
    }

    pub fn is_balanced(&self) -> bool {
        self.unclosed == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ControlCounter {
    occurrences: u32,
    outstanding: u32,
    first_line: Option<u32>,
}

/// Running counters for one analysis pass
#[derive(Debug, Default)]
pub struct BalanceTracker {
    symbols: [(u32, u32); 3],
    controls: [ControlCounter; 7],
    /// Open control structures, innermost last
    open_blocks: Vec<ControlKind>,
}

impl BalanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn symbol_slot(class: SymbolClass) -> usize {
        match class {
            SymbolClass::Brace => 0,
            SymbolClass::Paren => 1,
            SymbolClass::Bracket => 2,
        }
    }

    pub fn open_symbol(&mut self, class: SymbolClass) {
        self.symbols[Self::symbol_slot(class)].0 += 1;
    }

    pub fn close_symbol(&mut self, class: SymbolClass) {
        self.symbols[Self::symbol_slot(class)].1 += 1;
    }

    /// Record an occurrence that opens a block awaiting a `}`
    pub fn open_structure(&mut self, kind: ControlKind, line: u32) {
        self.count_structure(kind, line);
        self.controls[kind.index()].outstanding += 1;
        self.open_blocks.push(kind);
    }

    /// Record an occurrence that opens no block (the `while` tail of `do`)
    pub fn count_structure(&mut self, kind: ControlKind, line: u32) {
        let counter = &mut self.controls[kind.index()];
        counter.occurrences += 1;
        counter.first_line.get_or_insert(line);
    }

    /// Close the innermost open structure, returning its kind
    pub fn close_block(&mut self) -> Option<ControlKind> {
        let kind = self.open_blocks.pop()?;
        let counter = &mut self.controls[kind.index()];
        counter.outstanding = counter.outstanding.saturating_sub(1);
        Some(kind)
    }

    /// Line of the first occurrence of `kind`
    pub fn first_line(&self, kind: ControlKind) -> Option<u32> {
        self.controls[kind.index()].first_line
    }

    pub fn symbol_entries(&self) -> Vec<SymbolBalanceEntry> {
        SymbolClass::ALL
            .iter()
            .map(|&class| {
                let (opened, closed) = self.symbols[Self::symbol_slot(class)];
                SymbolBalanceEntry {
                    class,
                    opened,
                    closed,
                }
            })
            .collect()
    }

    pub fn control_entries(&self) -> Vec<ControlBalanceEntry> {
        ControlKind::ALL
            .iter()
            .map(|&kind| {
                let counter = self.controls[kind.index()];
                ControlBalanceEntry {
                    kind,
                    occurrences: counter.occurrences,
                    unclosed: counter.outstanding,
                    used: counter.occurrences > 0,
                }
            })
            .collect()
    }
}
