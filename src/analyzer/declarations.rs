use crate::diagnostics::diagnostics::Diagnostic;
use crate::lexer::tokens::{Scanned, TokenKind};

use super::analyzer::Analyzer;
use super::symbols::VarType;

/// Validates the definition body between 'var' and 'begin': a run of
/// `ident {, ident} : type ;` groups, registering every declared name.
/// Stops at the first violation.
pub fn validate_declarations(analyzer: &mut Analyzer) -> Result<(), Diagnostic> {
    while analyzer.has_tokens() && !analyzer.at_kind(TokenKind::Begin) {
        declaration_group(analyzer)?;
    }

    Ok(())
}

/// One declaration group. Every listed name receives the group's type;
/// a repeated name aborts the group with the remaining names unregistered.
fn declaration_group(analyzer: &mut Analyzer) -> Result<(), Diagnostic> {
    let names = identifier_list(analyzer)?;

    if !analyzer.eat(TokenKind::Colon) {
        return Err(Diagnostic::MissingColonAfterVariables);
    }

    let var_type = match VarType::from_lexeme(&analyzer.current_text()) {
        Some(var_type) => var_type,
        None => {
            return Err(Diagnostic::ExpectedTypeName {
                found: analyzer.current_text(),
            })
        }
    };
    analyzer.advance();

    for name in &names {
        analyzer.symbols.declare(name, var_type)?;
    }

    if !analyzer.eat(TokenKind::Semicolon) {
        return Err(Diagnostic::MissingDeclarationSemicolon);
    }

    Ok(())
}

/// The comma-separated identifier list opening a group. Two identifiers
/// with no comma between them are a violation of their own.
fn identifier_list(analyzer: &mut Analyzer) -> Result<Vec<String>, Diagnostic> {
    let first = match analyzer.current() {
        Some(Scanned::Invalid(text)) => {
            return Err(Diagnostic::InvalidIdentifier { name: text.clone() })
        }
        Some(Scanned::Token(token)) if token.kind == TokenKind::Identifier => token.value.clone(),
        _ => {
            return Err(Diagnostic::ExpectedIdentifier {
                found: analyzer.current_text(),
            })
        }
    };
    analyzer.advance();

    let mut names = vec![first];

    while analyzer.eat(TokenKind::Comma) {
        match analyzer.current() {
            Some(Scanned::Token(token)) if token.kind == TokenKind::Identifier => {
                names.push(token.value.clone());
                analyzer.advance();
            }
            _ => return Err(Diagnostic::ExpectedIdentifierAfterComma),
        }
    }

    if analyzer.at_kind(TokenKind::Identifier) {
        return Err(Diagnostic::MissingCommaBetweenIdentifiers);
    }

    Ok(names)
}
