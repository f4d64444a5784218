//! Unit tests for diagnostics.
//!
//! This module contains tests for diagnostic message rendering, the
//! collector's ordering, and report freezing.

use crate::diagnostics::diagnostics::{Diagnostic, Diagnostics};
use crate::BlockKind;

#[test]
fn test_program_shape_messages() {
    assert_eq!(Diagnostic::EmptyProgram.to_string(), "Empty program");
    assert_eq!(
        Diagnostic::MissingVarKeyword.to_string(),
        "Program must start with 'var'"
    );
    assert_eq!(
        Diagnostic::MissingBeginKeyword.to_string(),
        "Missing 'begin' after definition body"
    );
    assert_eq!(
        Diagnostic::MissingProgramEnd.to_string(),
        "Missing 'end' at program termination"
    );
}

#[test]
fn test_definition_body_messages() {
    let diagnostic = Diagnostic::InvalidIdentifier {
        name: "9i".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Invalid identifier: 9i");

    let diagnostic = Diagnostic::ExpectedIdentifier {
        found: ";".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Expected identifier, found: ;");

    assert_eq!(
        Diagnostic::ExpectedIdentifierAfterComma.to_string(),
        "Expected identifier after comma"
    );
    assert_eq!(
        Diagnostic::MissingCommaBetweenIdentifiers.to_string(),
        "Missing comma between identifiers"
    );
    assert_eq!(
        Diagnostic::MissingColonAfterVariables.to_string(),
        "Missing ':' after variable(s)"
    );

    let diagnostic = Diagnostic::ExpectedTypeName {
        found: "none".to_string(),
    };
    assert_eq!(
        diagnostic.to_string(),
        "Expected type (integer, longint, bool), found: none"
    );

    let diagnostic = Diagnostic::RepeatedDefinition {
        name: "i".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Repeated definition of variable: i");

    assert_eq!(
        Diagnostic::MissingDeclarationSemicolon.to_string(),
        "Missing ';' after variable declaration"
    );
}

#[test]
fn test_realization_messages() {
    let diagnostic = Diagnostic::InvalidRealizationToken {
        text: "=".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Invalid token in realization: =");

    let diagnostic = Diagnostic::UndefinedVariable {
        name: "x".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Undefined variable: x");

    let diagnostic = Diagnostic::MissingAssignOperator {
        name: "i".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Missing ':=' after identifier: i");

    let diagnostic = Diagnostic::ExpectedAssignValue {
        found: "none".to_string(),
    };
    assert_eq!(
        diagnostic.to_string(),
        "Expected number or identifier after ':=', found: none"
    );

    let diagnostic = Diagnostic::UndefinedAssignValue {
        name: "j".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Undefined variable in assignment: j");

    assert_eq!(
        Diagnostic::MissingAssignmentSemicolon.to_string(),
        "Missing ';' after assignment"
    );

    let diagnostic = Diagnostic::UnexpectedToken {
        text: "+".to_string(),
    };
    assert_eq!(diagnostic.to_string(), "Unexpected token: +");
}

#[test]
fn test_block_structure_messages() {
    let diagnostic = Diagnostic::MissingConditionParen {
        block: BlockKind::While,
    };
    assert_eq!(diagnostic.to_string(), "Missing '(' after while");

    let diagnostic = Diagnostic::UnbalancedCondition {
        block: BlockKind::If,
    };
    assert_eq!(
        diagnostic.to_string(),
        "Unbalanced parentheses in if condition"
    );

    assert_eq!(
        Diagnostic::MissingDoKeyword.to_string(),
        "Missing 'do' after while condition"
    );
    assert_eq!(
        Diagnostic::MissingThenKeyword.to_string(),
        "Missing 'then' after if condition"
    );
    assert_eq!(Diagnostic::UnmatchedEnd.to_string(), "Unmatched 'end'");

    let diagnostic = Diagnostic::MissingBlockSemicolon {
        block: BlockKind::Begin,
    };
    assert_eq!(diagnostic.to_string(), "begin 's end missing ';'");

    assert_eq!(
        Diagnostic::ElseWithoutIf.to_string(),
        "'else' not matched to 'if'"
    );

    let diagnostic = Diagnostic::MissingBlockEnd {
        block: BlockKind::While,
    };
    assert_eq!(diagnostic.to_string(), "Missing 'end' to match while");
}

#[test]
fn test_collector_preserves_order() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.push(Diagnostic::EmptyProgram);
    diagnostics.push(Diagnostic::UndefinedVariable {
        name: "x".to_string(),
    });

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.entries()[0], Diagnostic::EmptyProgram);
    assert_eq!(
        diagnostics.entries()[1],
        Diagnostic::UndefinedVariable {
            name: "x".to_string()
        }
    );
}

#[test]
fn test_empty_collector_reports_success() {
    let report = Diagnostics::new().into_report();

    assert!(report.success);
    assert!(report.diagnostics.is_empty());
    assert!(report.messages().is_empty());
}

#[test]
fn test_report_renders_messages_in_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.push(Diagnostic::MissingVarKeyword);
    diagnostics.push(Diagnostic::MissingAssignmentSemicolon);

    let report = diagnostics.into_report();

    assert!(!report.success);
    assert_eq!(
        report.messages(),
        vec![
            "Program must start with 'var'".to_string(),
            "Missing ';' after assignment".to_string(),
        ]
    );
}
