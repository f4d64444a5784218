use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("var", TokenKind::Var);
        map.insert("integer", TokenKind::Integer);
        map.insert("longint", TokenKind::Longint);
        map.insert("bool", TokenKind::Bool);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,

    OpenParen,
    CloseParen,

    Assign,    // :=
    Equals,    // ==
    NotEquals, // <>

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Var,
    Integer,
    Longint,
    Bool,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

/// One scan step's outcome: a well-formed token, or source text that
/// failed lexical validation and is carried forward for the validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scanned {
    Token(Token),
    Invalid(String),
}

impl Scanned {
    pub fn kind(&self) -> Option<TokenKind> {
        match self {
            Scanned::Token(token) => Some(token.kind),
            Scanned::Invalid(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Scanned::Token(token) => &token.value,
            Scanned::Invalid(text) => text,
        }
    }
}
