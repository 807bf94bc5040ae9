//! Static catalog of accepted statement shapes

use crate::lexer::TokenKind;
use crate::lexer::TokenKind::*;

/// One accepted statement shape: an exact token-kind sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxRule {
    pub name: &'static str,
    pub pattern: &'static [TokenKind],
    pub message: &'static str,
}

impl SyntaxRule {
    const fn new(name: &'static str, pattern: &'static [TokenKind], message: &'static str) -> Self {
        Self {
            name,
            pattern,
            message,
        }
    }

    /// Same length and the same kind at every position
    pub fn matches(&self, kinds: &[TokenKind]) -> bool {
        self.pattern.len() == kinds.len() && self.pattern.iter().zip(kinds).all(|(a, b)| a == b)
    }
}

/// Rules are tried in order; the first match wins.
pub static SYNTAX_RULES: &[SyntaxRule] = &[
    SyntaxRule::new(
        "variable declaration",
        &[TypeInt, Identifier, Semi],
        "malformed variable declaration",
    ),
    SyntaxRule::new(
        "variable declaration with assignment",
        &[TypeInt, Identifier, Assign, IntLiteral, Semi],
        "malformed variable declaration with assignment",
    ),
    SyntaxRule::new(
        "variable declaration with assignment (float)",
        &[TypeFloat, Identifier, Assign, FloatLiteral, Semi],
        "malformed variable declaration with assignment (float)",
    ),
    SyntaxRule::new(
        "variable declaration with assignment (string)",
        &[TypeString, Identifier, Assign, StringLiteral, Semi],
        "malformed variable declaration with assignment (string)",
    ),
    SyntaxRule::new(
        "variable declaration with assignment (char)",
        &[TypeChar, Identifier, Assign, CharLiteral, Semi],
        "malformed variable declaration with assignment (char)",
    ),
    SyntaxRule::new(
        "variable declaration with assignment (bool)",
        &[TypeBool, Identifier, Assign, True, Semi],
        "malformed variable declaration with assignment (bool)",
    ),
    SyntaxRule::new(
        "if statement",
        &[If, LParen, Identifier, Gt, IntLiteral, RParen, LBrace],
        "malformed if structure",
    ),
    SyntaxRule::new("else statement", &[Else, LBrace], "malformed else structure"),
    SyntaxRule::new(
        "else if statement",
        &[Else, If, LParen, Identifier, Gt, IntLiteral, RParen, LBrace],
        "malformed else if structure",
    ),
    SyntaxRule::new(
        "output",
        &[Output, LParen, StringLiteral, RParen, Semi],
        "malformed output call",
    ),
    SyntaxRule::new(
        "for loop",
        &[
            For, LParen, Identifier, Assign, IntLiteral, Semi, Identifier, Lt, IntLiteral, Semi,
            Identifier, PlusPlus, RParen, LBrace,
        ],
        "malformed for structure",
    ),
    SyntaxRule::new(
        "while loop",
        &[While, LParen, Identifier, Lt, IntLiteral, RParen, LBrace],
        "malformed while structure",
    ),
    SyntaxRule::new("do statement", &[Do, LBrace], "malformed do structure"),
    SyntaxRule::new(
        "do-while closing",
        &[RBrace, While, LParen, Identifier, Lt, IntLiteral, RParen, Semi],
        "malformed do-while closing",
    ),
    SyntaxRule::new("block end", &[RBrace], "malformed block end"),
    SyntaxRule::new(
        "variable assignment",
        &[Identifier, Assign, IntLiteral, Semi],
        "malformed variable assignment",
    ),
    SyntaxRule::new(
        "variable assignment (float)",
        &[Identifier, Assign, FloatLiteral, Semi],
        "malformed variable assignment (float)",
    ),
    SyntaxRule::new(
        "variable assignment (string)",
        &[Identifier, Assign, StringLiteral, Semi],
        "malformed variable assignment (string)",
    ),
    SyntaxRule::new(
        "function with return type",
        &[Function, TypeInt, Identifier, LParen, RParen, LBrace],
        "malformed function declaration",
    ),
    SyntaxRule::new(
        "return statement",
        &[Return, Identifier, Semi],
        "malformed return structure",
    ),
    SyntaxRule::new(
        "return literal",
        &[Return, IntLiteral, Semi],
        "malformed return structure",
    ),
];

/// First rule accepting the given kind sequence
pub fn find_rule(kinds: &[TokenKind]) -> Option<&'static SyntaxRule> {
    SYNTAX_RULES.iter().find(|rule| rule.matches(kinds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let rule = find_rule(&[Else, LBrace]).unwrap();
        assert_eq!(rule.name, "else statement");
    }

    #[test]
    fn test_length_sensitive() {
        assert!(find_rule(&[Else, LBrace, RBrace]).is_none());
        assert!(find_rule(&[Else]).is_none());
    }

    #[test]
    fn test_order_sensitive() {
        assert!(find_rule(&[LBrace, Else]).is_none());
    }

    #[test]
    fn test_for_missing_increment_rejected() {
        let truncated = [
            For, LParen, Identifier, Assign, IntLiteral, Semi, Identifier, Lt, IntLiteral, Semi,
            RParen, LBrace,
        ];
        assert!(find_rule(&truncated).is_none());
    }

    #[test]
    fn test_patterns_are_nonempty() {
        assert!(SYNTAX_RULES.iter().all(|rule| !rule.pattern.is_empty()));
    }
}
