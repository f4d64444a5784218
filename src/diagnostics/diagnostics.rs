use thiserror::Error;

use crate::BlockKind;

/// Every user-visible finding the analyzer can report. The `#[error]`
/// strings are the exact report texts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    // Program shape
    #[error("Empty program")]
    EmptyProgram,
    #[error("Program must start with 'var'")]
    MissingVarKeyword,
    #[error("Missing 'begin' after definition body")]
    MissingBeginKeyword,
    #[error("Missing 'end' at program termination")]
    MissingProgramEnd,

    // Definition body
    #[error("Invalid identifier: {name}")]
    InvalidIdentifier { name: String },
    #[error("Expected identifier, found: {found}")]
    ExpectedIdentifier { found: String },
    #[error("Expected identifier after comma")]
    ExpectedIdentifierAfterComma,
    #[error("Missing comma between identifiers")]
    MissingCommaBetweenIdentifiers,
    #[error("Missing ':' after variable(s)")]
    MissingColonAfterVariables,
    #[error("Expected type (integer, longint, bool), found: {found}")]
    ExpectedTypeName { found: String },
    #[error("Repeated definition of variable: {name}")]
    RepeatedDefinition { name: String },
    #[error("Missing ';' after variable declaration")]
    MissingDeclarationSemicolon,

    // Realization body
    #[error("Invalid token in realization: {text}")]
    InvalidRealizationToken { text: String },
    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },
    #[error("Missing ':=' after identifier: {name}")]
    MissingAssignOperator { name: String },
    #[error("Expected number or identifier after ':=', found: {found}")]
    ExpectedAssignValue { found: String },
    #[error("Undefined variable in assignment: {name}")]
    UndefinedAssignValue { name: String },
    #[error("Missing ';' after assignment")]
    MissingAssignmentSemicolon,
    #[error("Unexpected token: {text}")]
    UnexpectedToken { text: String },

    // Block structure
    #[error("Missing '(' after {block}")]
    MissingConditionParen { block: BlockKind },
    #[error("Unbalanced parentheses in {block} condition")]
    UnbalancedCondition { block: BlockKind },
    #[error("Missing 'do' after while condition")]
    MissingDoKeyword,
    #[error("Missing 'then' after if condition")]
    MissingThenKeyword,
    #[error("Unmatched 'end'")]
    UnmatchedEnd,
    #[error("{block} 's end missing ';'")]
    MissingBlockSemicolon { block: BlockKind },
    #[error("'else' not matched to 'if'")]
    ElseWithoutIf,
    #[error("Missing 'end' to match {block}")]
    MissingBlockEnd { block: BlockKind },
}

/// Ordered, append-only collection of the diagnostics raised during one
/// analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { entries: vec![] }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Freezes the collection into the run's final report.
    pub fn into_report(self) -> Report {
        Report {
            success: self.entries.is_empty(),
            diagnostics: self.entries,
        }
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Diagnostics::new()
    }
}

/// Outcome of analyzing one source text: `success` is true exactly when
/// `diagnostics` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub success: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Rendered diagnostic texts, in the order they were raised.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .iter()
            .map(|diagnostic| diagnostic.to_string())
            .collect()
    }
}
