//! Lexer module for tokenizing Nova source code

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind};

/// Tokenize a whole source buffer.
///
/// Total: every input produces a stream, unrecognized characters included
/// as [`TokenKind::LexicalError`] tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t\n").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let source = "function int _f() {\n  return 1;\n}\n@";
        assert_eq!(tokenize(source), tokenize(source));
    }

    #[test]
    fn test_lines_non_decreasing() {
        let source = "int _a = 1;\nif (_a > 0) {\n output(\"x\");\n}\n\n~ _b";
        let tokens = tokenize(source);
        assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
    }
}
