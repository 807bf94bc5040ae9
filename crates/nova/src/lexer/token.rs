//! Token definitions for the Nova lexer

use crate::common::Span;
use logos::Logos;

/// Token with its literal text and source location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 1-based line of the token's first character
    pub line: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, line: u32, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            line,
            span,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::LexicalError
    }
}

/// All token kinds in Nova
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\n\r\f]+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip line comments
pub enum TokenKind {
    // === Keywords ===
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("function")]
    Function,
    #[token("return")]
    Return,
    #[token("output")]
    Output,

    // === Type keywords ===
    #[token("int")]
    TypeInt,
    #[token("float")]
    TypeFloat,
    #[token("string")]
    TypeString,
    #[token("char")]
    TypeChar,
    #[token("bool")]
    TypeBool,

    #[token("true")]
    True,
    #[token("false")]
    False,

    // === Identifiers ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    // === Literals ===
    #[regex(r"[0-9]+")]
    IntLiteral,
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatLiteral,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,
    #[regex(r"'([^'\\\n]|\\.)'")]
    CharLiteral,

    // === Operators ===
    // Assignment
    #[token("=")]
    Assign,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,

    // Relational
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,

    // Logical
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,

    // Arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,

    // Punctuation
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,

    // Special
    LexicalError,
}

impl TokenKind {
    /// Check if this token names a data type (`int`, `float`, ...)
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::TypeInt
                | TokenKind::TypeFloat
                | TokenKind::TypeString
                | TokenKind::TypeChar
                | TokenKind::TypeBool
        )
    }

    /// Check if this is a compound assignment operator
    pub fn is_compound_assignment(&self) -> bool {
        matches!(
            self,
            TokenKind::PlusEq | TokenKind::MinusEq | TokenKind::StarEq | TokenKind::SlashEq
        )
    }

    /// Arithmetic operators, including increment/decrement and compound assignment
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::PlusPlus
                | TokenKind::MinusMinus
        ) || self.is_compound_assignment()
    }

    /// Operators the language rejects wherever they appear
    pub fn is_unsupported_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Percent | TokenKind::PlusPlus | TokenKind::MinusMinus
        ) || self.is_compound_assignment()
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::LtEq
                | TokenKind::GtEq
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::True
                | TokenKind::False
        )
    }

    /// Short tag used in token exports
    pub fn code(&self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::For => "FOR",
            TokenKind::While => "WHI",
            TokenKind::Do => "DO",
            TokenKind::Function => "FCTN",
            TokenKind::Return => "RTRN",
            TokenKind::Output => "OUT",
            TokenKind::TypeInt => "TPINT",
            TokenKind::TypeFloat => "TPDBL",
            TokenKind::TypeString => "TPSTR",
            TokenKind::TypeChar => "TPCHR",
            TokenKind::TypeBool => "TPBOL",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Identifier => "IDEN",
            TokenKind::IntLiteral => "NUMINT",
            TokenKind::FloatLiteral => "NUMDB",
            TokenKind::StringLiteral => "STR",
            TokenKind::CharLiteral => "CHR",
            TokenKind::Assign => "ASSGN",
            TokenKind::PlusEq => "AOP+=",
            TokenKind::MinusEq => "AOP-=",
            TokenKind::StarEq => "AOP*=",
            TokenKind::SlashEq => "AOP/=",
            TokenKind::EqEq => "ROP==",
            TokenKind::NotEq => "ROP!=",
            TokenKind::Lt => "ROP<",
            TokenKind::Gt => "ROP>",
            TokenKind::LtEq => "ROP<=",
            TokenKind::GtEq => "ROP>=",
            TokenKind::AmpAmp => "LOP&&",
            TokenKind::PipePipe => "LOP||",
            TokenKind::Bang => "LOP!",
            TokenKind::Plus => "AOP+",
            TokenKind::Minus => "AOP-",
            TokenKind::Star => "AOP*",
            TokenKind::Slash => "AOP/",
            TokenKind::Percent => "AOP%",
            TokenKind::PlusPlus => "AOP++",
            TokenKind::MinusMinus => "AOP--",
            TokenKind::LBrace => "CH{",
            TokenKind::RBrace => "CH}",
            TokenKind::LParen => "CH(",
            TokenKind::RParen => "CH)",
            TokenKind::LBracket => "CH[",
            TokenKind::RBracket => "CH]",
            TokenKind::Semi => "CH;",
            TokenKind::Colon => "CH:",
            TokenKind::Comma => "CH,",
            TokenKind::LexicalError => "ERR",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::IntLiteral => write!(f, "integer literal"),
            TokenKind::FloatLiteral => write!(f, "float literal"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::CharLiteral => write!(f, "char literal"),
            TokenKind::If => write!(f, "'if'"),
            TokenKind::Else => write!(f, "'else'"),
            TokenKind::For => write!(f, "'for'"),
            TokenKind::While => write!(f, "'while'"),
            TokenKind::Do => write!(f, "'do'"),
            TokenKind::Function => write!(f, "'function'"),
            TokenKind::Return => write!(f, "'return'"),
            TokenKind::Output => write!(f, "'output'"),
            TokenKind::TypeInt => write!(f, "'int'"),
            TokenKind::TypeFloat => write!(f, "'float'"),
            TokenKind::TypeString => write!(f, "'string'"),
            TokenKind::TypeChar => write!(f, "'char'"),
            TokenKind::TypeBool => write!(f, "'bool'"),
            TokenKind::True => write!(f, "'true'"),
            TokenKind::False => write!(f, "'false'"),
            TokenKind::Assign => write!(f, "'='"),
            TokenKind::PlusEq => write!(f, "'+='"),
            TokenKind::MinusEq => write!(f, "'-='"),
            TokenKind::StarEq => write!(f, "'*='"),
            TokenKind::SlashEq => write!(f, "'/='"),
            TokenKind::EqEq => write!(f, "'=='"),
            TokenKind::NotEq => write!(f, "'!='"),
            TokenKind::Lt => write!(f, "'<'"),
            TokenKind::Gt => write!(f, "'>'"),
            TokenKind::LtEq => write!(f, "'<='"),
            TokenKind::GtEq => write!(f, "'>='"),
            TokenKind::AmpAmp => write!(f, "'&&'"),
            TokenKind::PipePipe => write!(f, "'||'"),
            TokenKind::Bang => write!(f, "'!'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Percent => write!(f, "'%'"),
            TokenKind::PlusPlus => write!(f, "'++'"),
            TokenKind::MinusMinus => write!(f, "'--'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBracket => write!(f, "'['"),
            TokenKind::RBracket => write!(f, "']'"),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::LexicalError => write!(f, "lexical error"),
        }
    }
}
