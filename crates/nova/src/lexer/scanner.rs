//! Lexer implementation using logos

use super::token::{Token, TokenKind};
use crate::common::Span;
use logos::Logos;

/// Lexer for Nova source code
///
/// Never fails: characters that start no token become
/// [`TokenKind::LexicalError`] tokens and scanning carries on.
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, TokenKind>,
    /// Byte offset of `inner`'s input within `source`
    base: usize,
    line: u32,
    /// Byte offset up to which newlines have been counted
    cursor: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            base: 0,
            line: 1,
            cursor: 0,
        }
    }

    /// Get the next token, or `None` at end of input
    pub fn next_token(&mut self) -> Option<Token> {
        let result = self.inner.next()?;
        let span = Span::from(self.inner.span()).offset(self.base);
        self.advance_line(span.start);

        match result {
            Ok(kind) => Some(Token::new(kind, self.inner.slice(), self.line, span)),
            Err(()) => Some(self.error_token(span)),
        }
    }

    /// Tokenize the entire source and return all tokens
    pub fn tokenize_all(self) -> Vec<Token> {
        self.collect()
    }

    /// Error token for the first character of `span`.
    ///
    /// A failed partial match (an unterminated literal) can cover several
    /// characters; only the first is reported and scanning restarts right
    /// after it.
    fn error_token(&mut self, span: Span) -> Token {
        let first_len = self.source[span.start..].chars().next().map_or(1, char::len_utf8);
        let end = span.start + first_len;
        if end < span.end {
            self.inner = TokenKind::lexer(&self.source[end..]);
            self.base = end;
        }
        Token::new(
            TokenKind::LexicalError,
            &self.source[span.start..end],
            self.line,
            Span::new(span.start, end),
        )
    }

    /// Count newlines between the last token start and `offset`
    fn advance_line(&mut self, offset: usize) {
        let skipped = &self.source[self.cursor..offset];
        self.line += skipped.bytes().filter(|&b| b == b'\n').count() as u32;
        self.cursor = offset;
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).map(|t| t.kind).collect()
    }

    #[test]
    fn test_keywords() {
        let source = "if else for while do function return output";
        assert_eq!(
            kinds(source),
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::For,
                TokenKind::While,
                TokenKind::Do,
                TokenKind::Function,
                TokenKind::Return,
                TokenKind::Output,
            ]
        );
    }

    #[test]
    fn test_type_keywords() {
        assert_eq!(
            kinds("int float string char bool true false"),
            vec![
                TokenKind::TypeInt,
                TokenKind::TypeFloat,
                TokenKind::TypeString,
                TokenKind::TypeChar,
                TokenKind::TypeBool,
                TokenKind::True,
                TokenKind::False,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let tokens = Lexer::new("iffy _if doit integer").tokenize_all();
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
        assert_eq!(tokens[0].value, "iffy");
        assert_eq!(tokens[3].value, "integer");
    }

    #[test]
    fn test_literals() {
        let tokens = Lexer::new(r#"42 3.14 "hi there" 'a' '\n'"#).tokenize_all();
        assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
        assert_eq!(tokens[1].kind, TokenKind::FloatLiteral);
        assert_eq!(tokens[1].value, "3.14");
        assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[2].value, "\"hi there\"");
        assert_eq!(tokens[3].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[4].kind, TokenKind::CharLiteral);
        assert_eq!(tokens[4].value, "'\\n'");
    }

    #[test]
    fn test_multi_char_operators_not_split() {
        assert_eq!(
            kinds("== != <= >= && || ++ -- += -= *= /="),
            vec![
                TokenKind::EqEq,
                TokenKind::NotEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::AmpAmp,
                TokenKind::PipePipe,
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::PlusEq,
                TokenKind::MinusEq,
                TokenKind::StarEq,
                TokenKind::SlashEq,
            ]
        );
        assert_eq!(kinds("_a==_b"), vec![TokenKind::Identifier, TokenKind::EqEq, TokenKind::Identifier]);
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(
            kinds("= < > ! + - * / %"),
            vec![
                TokenKind::Assign,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Bang,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Percent,
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let tokens = Lexer::new("int _x;\n\n_x = 5;\n").tokenize_all();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 3, 3, 3, 3]);
    }

    #[test]
    fn test_unterminated_string_resumes_on_next_line() {
        let tokens = Lexer::new("_a = \"abc\n_b = 1;").tokenize_all();
        let summary: Vec<(TokenKind, &str, u32)> =
            tokens.iter().map(|t| (t.kind, t.value.as_str(), t.line)).collect();
        assert_eq!(
            summary,
            vec![
                (TokenKind::Identifier, "_a", 1),
                (TokenKind::Assign, "=", 1),
                (TokenKind::LexicalError, "\"", 1),
                (TokenKind::Identifier, "abc", 1),
                (TokenKind::Identifier, "_b", 2),
                (TokenKind::Assign, "=", 2),
                (TokenKind::IntLiteral, "1", 2),
                (TokenKind::Semi, ";", 2),
            ]
        );
        assert_eq!(tokens[4].span, Span::new(10, 12));
    }

    #[test]
    fn test_unterminated_char_reports_quote_only() {
        let tokens = Lexer::new("'ab' _x").tokenize_all();
        assert!(tokens[0].is_error());
        assert_eq!(tokens[0].value, "'");
        assert_eq!(tokens[1].value, "ab");
        assert_eq!(tokens.last().map(|t| t.value.as_str()), Some("_x"));
    }

    #[test]
    fn test_comments_skipped() {
        let tokens = Lexer::new("int _x; // trailing\n// whole line\n_x = 1;").tokenize_all();
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[3].line, 3);
    }

    #[test]
    fn test_unrecognized_character() {
        let tokens = Lexer::new("_a @ _b\n#").tokenize_all();
        assert_eq!(tokens.len(), 4);
        assert!(tokens[1].is_error());
        assert_eq!(tokens[1].value, "@");
        assert_eq!(tokens[1].line, 1);
        assert!(tokens[3].is_error());
        assert_eq!(tokens[3].line, 2);
    }

    #[test]
    fn test_spans() {
        let tokens = Lexer::new("int _x;").tokenize_all();
        assert_eq!(tokens[1].span, Span::new(4, 6));
    }
}
