//! Lexical analysis module for the analyzer.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into the token sequence the validators consume. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Case-insensitive keyword recognition with original casing preserved
//! - Maximal grouping of words and two-character operators
//! - Invalid source text carried forward as part of the sequence

pub mod lexer;
pub mod tokens;
