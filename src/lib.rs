#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod analyzer;
pub mod diagnostics;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Marker for an open block on the structural validator's stack: which
/// opening keyword is still waiting for its 'end'.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Begin,
    If,
    While,
}

impl Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Begin => write!(f, "begin"),
            BlockKind::If => write!(f, "if"),
            BlockKind::While => write!(f, "while"),
        }
    }
}
