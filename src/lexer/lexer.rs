use lazy_static::lazy_static;
use regex::Regex;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Scanned, Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z][^\\s;:,()+\\-*/<>=]*").unwrap(), handler: word_handler },
        RegexPattern { regex: Regex::new("^[0-9][^\\s;:,()+\\-*/<>=]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, ":=") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^<>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "<>") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: equals_handler },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

pub struct Lexer {
    tokens: Vec<Scanned>,
    source: String,
    pos: usize,
}

impl Lexer {
    fn new(source: &str) -> Lexer {
        Lexer {
            pos: 0,
            tokens: vec![],
            source: String::from(source),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(Scanned::Token(token));
    }

    pub fn push_invalid(&mut self, text: &str) {
        self.tokens.push(Scanned::Invalid(String::from(text)));
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

// A maximal word led by a letter: keyword (looked up case-insensitively),
// identifier, or one invalid lexeme when any character is non-alphanumeric.
fn word_handler(lexer: &mut Lexer, matched: &str) {
    let lowered = matched.to_lowercase();

    if let Some(kind) = RESERVED_LOOKUP.get(lowered.as_str()) {
        lexer.push(MK_TOKEN!(*kind, String::from(matched)));
    } else if matched.chars().all(|c| c.is_ascii_alphanumeric()) {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, String::from(matched)));
    } else {
        lexer.push_invalid(matched);
    }

    lexer.advance_n(matched.len());
}

// A maximal word led by a digit is a number only when it is all digits;
// otherwise the whole word is one invalid lexeme ("9i" is never 9 + i).
fn number_handler(lexer: &mut Lexer, matched: &str) {
    if matched.chars().all(|c| c.is_ascii_digit()) {
        lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched)));
    } else {
        lexer.push_invalid(matched);
    }

    lexer.advance_n(matched.len());
}

// ':=' and '==' are claimed by earlier patterns; a lone '=' is no operator
// of the language.
fn equals_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push_invalid(matched);
    lexer.advance_n(matched.len());
}

pub fn tokenize(source: &str) -> Vec<Scanned> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in PATTERNS.iter() {
            let found = pattern
                .regex
                .find(lex.remainder())
                .map(|m| String::from(m.as_str()));

            if let Some(text) = found {
                (pattern.handler)(&mut lex, &text);
                matched = true;
                break;
            }
        }

        if !matched {
            let culprit = match lex.remainder().chars().next() {
                Some(c) => c.to_string(),
                None => break,
            };
            lex.push_invalid(&culprit);
            lex.advance_n(culprit.len());
        }
    }

    lex.tokens
}
