//! Analysis driver and per-run state.
//!
//! This module contains the main Analyzer struct and the `analyze` entry
//! point. The driver walks the fixed program shape
//!
//! ```text
//! var <definition body> begin <realization body> end
//! ```
//!
//! handing each region to its validator and recording the first
//! diagnostic raised. Everything mutable about a run (cursor, symbol
//! table, diagnostics) lives in the Analyzer value, so runs are
//! independent and reentrant.

use crate::diagnostics::diagnostics::{Diagnostic, Diagnostics, Report};
use crate::lexer::lexer::tokenize;
use crate::lexer::tokens::{Scanned, TokenKind};

use super::declarations::validate_declarations;
use super::realization::validate_realization;
use super::symbols::SymbolTable;

/// Analysis state threaded through every validation phase.
pub struct Analyzer {
    /// The scanned sequence under analysis
    tokens: Vec<Scanned>,
    /// Current position in the sequence
    pos: usize,
    /// Declared variables, filled by the declaration phase
    pub symbols: SymbolTable,
    /// Diagnostics raised so far, in order
    pub diagnostics: Diagnostics,
}

impl Analyzer {
    pub fn new(tokens: Vec<Scanned>) -> Self {
        Analyzer {
            tokens,
            pos: 0,
            symbols: SymbolTable::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Returns the current entry without advancing.
    pub fn current(&self) -> Option<&Scanned> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current entry, None at exhaustion and for
    /// invalid lexemes.
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().and_then(Scanned::kind)
    }

    /// Source text of the current entry, or "none" once the sequence is
    /// exhausted. Several diagnostics interpolate this directly.
    pub fn current_text(&self) -> String {
        match self.current() {
            Some(scanned) => String::from(scanned.text()),
            None => String::from("none"),
        }
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn at_kind(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consumes the current entry if it is a token of the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at_kind(kind) {
            self.advance();
            return true;
        }

        false
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }
}

/// Analyzes one source text end to end and returns its report.
///
/// Tokenization is total, so every outcome of this function is a regular
/// `Report`; a failed run is a report with `success == false` and the
/// first diagnostic raised.
pub fn analyze(source: &str) -> Report {
    let mut analyzer = Analyzer::new(tokenize(source));

    if let Err(diagnostic) = validate_program(&mut analyzer) {
        analyzer.diagnostics.push(diagnostic);
    }

    analyzer.diagnostics.into_report()
}

/// The fixed program shape: 'var', definition body, 'begin', realization
/// body, terminating 'end'. The structural validator leaves the cursor on
/// the outer 'end' for the final check.
fn validate_program(analyzer: &mut Analyzer) -> Result<(), Diagnostic> {
    if !analyzer.has_tokens() {
        return Err(Diagnostic::EmptyProgram);
    }

    if !analyzer.eat(TokenKind::Var) {
        return Err(Diagnostic::MissingVarKeyword);
    }

    validate_declarations(analyzer)?;

    if !analyzer.eat(TokenKind::Begin) {
        return Err(Diagnostic::MissingBeginKeyword);
    }

    validate_realization(analyzer)?;

    if !analyzer.at_kind(TokenKind::End) {
        return Err(Diagnostic::MissingProgramEnd);
    }

    Ok(())
}
