//! Structural validation of the realization body.
//!
//! Block structure is tracked with an explicit stack of [`BlockKind`]
//! markers rather than recursion: every `begin`, `if` and `while` pushes,
//! every `end` pops, and the marker on top decides what an `else` or a
//! nested `end` may legally follow. The entry for the program block whose
//! 'begin' the driver consumed is seeded before the first statement.

use crate::diagnostics::diagnostics::Diagnostic;
use crate::lexer::tokens::{Scanned, TokenKind};
use crate::BlockKind;

use super::analyzer::Analyzer;

/// Validates the realization body. Returns with the cursor resting on the
/// program's terminating 'end'; consuming it is left to the driver.
pub fn validate_realization(analyzer: &mut Analyzer) -> Result<(), Diagnostic> {
    let mut blocks = vec![BlockKind::Begin];

    while analyzer.has_tokens() {
        let kind = match analyzer.current() {
            Some(Scanned::Invalid(text)) => {
                return Err(Diagnostic::InvalidRealizationToken { text: text.clone() })
            }
            Some(Scanned::Token(token)) => token.kind,
            None => break,
        };

        match kind {
            TokenKind::Identifier => assignment(analyzer)?,
            TokenKind::While => {
                analyzer.advance();
                blocks.push(BlockKind::While);
                condition(analyzer, BlockKind::While)?;
            }
            TokenKind::If => {
                analyzer.advance();
                blocks.push(BlockKind::If);
                condition(analyzer, BlockKind::If)?;
            }
            TokenKind::Begin => {
                analyzer.advance();
                blocks.push(BlockKind::Begin);
            }
            TokenKind::Else => {
                if blocks.last() != Some(&BlockKind::If) {
                    return Err(Diagnostic::ElseWithoutIf);
                }
                analyzer.advance();
            }
            TokenKind::End => match blocks.pop() {
                None => return Err(Diagnostic::UnmatchedEnd),
                // Program terminator: leave the cursor on this 'end'.
                Some(_) if blocks.is_empty() => return Ok(()),
                Some(closed) => {
                    analyzer.advance();
                    require(
                        analyzer,
                        TokenKind::Semicolon,
                        Diagnostic::MissingBlockSemicolon { block: closed },
                    )?;
                }
            },
            _ => {
                return Err(Diagnostic::UnexpectedToken {
                    text: analyzer.current_text(),
                })
            }
        }
    }

    // Input ran out before the program block was closed.
    match blocks.last() {
        Some(&kind) => Err(Diagnostic::MissingBlockEnd { block: kind }),
        None => Ok(()),
    }
}

/// One assignment statement: `name := value ;` where value is a number or
/// an already-declared identifier. The condition of the enclosing block,
/// if any, played no part in declaring `name`; only the definition body
/// did.
fn assignment(analyzer: &mut Analyzer) -> Result<(), Diagnostic> {
    let name = analyzer.current_text();
    if !analyzer.symbols.is_declared(&name) {
        return Err(Diagnostic::UndefinedVariable { name });
    }
    analyzer.advance();

    require(
        analyzer,
        TokenKind::Assign,
        Diagnostic::MissingAssignOperator { name },
    )?;

    match analyzer.current() {
        Some(Scanned::Token(token)) if token.kind == TokenKind::Number => {}
        Some(Scanned::Token(token)) if token.kind == TokenKind::Identifier => {
            if !analyzer.symbols.is_declared(&token.value) {
                return Err(Diagnostic::UndefinedAssignValue {
                    name: token.value.clone(),
                });
            }
        }
        _ => {
            return Err(Diagnostic::ExpectedAssignValue {
                found: analyzer.current_text(),
            })
        }
    }
    analyzer.advance();

    require(
        analyzer,
        TokenKind::Semicolon,
        Diagnostic::MissingAssignmentSemicolon,
    )
}

/// The parenthesized condition after 'while' or 'if', checked by
/// parenthesis counting alone; the enclosed tokens are not inspected.
/// The construct's follow keyword ('do' / 'then') must sit directly
/// after the closing parenthesis.
fn condition(analyzer: &mut Analyzer, block: BlockKind) -> Result<(), Diagnostic> {
    require(
        analyzer,
        TokenKind::OpenParen,
        Diagnostic::MissingConditionParen { block },
    )?;

    let mut depth = 1;
    while depth > 0 {
        let kind = match analyzer.current() {
            Some(scanned) => scanned.kind(),
            None => return Err(Diagnostic::UnbalancedCondition { block }),
        };

        match kind {
            Some(TokenKind::OpenParen) => depth += 1,
            Some(TokenKind::CloseParen) => depth -= 1,
            _ => {}
        }

        analyzer.advance();
    }

    match block {
        BlockKind::If => require(analyzer, TokenKind::Then, Diagnostic::MissingThenKeyword),
        _ => require(analyzer, TokenKind::Do, Diagnostic::MissingDoKeyword),
    }
}

/// Demands one specific token at the cursor and consumes it. A lexical
/// error lexeme occupying the slot is a finding of its own; a missing or
/// different token raises the caller's diagnostic.
fn require(
    analyzer: &mut Analyzer,
    kind: TokenKind,
    missing: Diagnostic,
) -> Result<(), Diagnostic> {
    match analyzer.current() {
        Some(Scanned::Invalid(text)) => Err(Diagnostic::InvalidRealizationToken {
            text: text.clone(),
        }),
        Some(Scanned::Token(token)) if token.kind == kind => {
            analyzer.advance();
            Ok(())
        }
        _ => Err(missing),
    }
}
