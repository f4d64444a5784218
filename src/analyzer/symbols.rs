use std::collections::HashMap;

use crate::diagnostics::diagnostics::Diagnostic;

/// The declarable types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarType {
    Integer,
    Longint,
    Bool,
}

impl VarType {
    /// Case-insensitive type-name lookup, matching the keyword rules.
    pub fn from_lexeme(lexeme: &str) -> Option<VarType> {
        match lexeme.to_lowercase().as_str() {
            "integer" => Some(VarType::Integer),
            "longint" => Some(VarType::Longint),
            "bool" => Some(VarType::Bool),
            _ => None,
        }
    }
}

/// Declared variables of one analysis run. Names are case-sensitive and
/// every name can be bound exactly once; a rejected rebind leaves the
/// original binding untouched.
#[derive(Debug)]
pub struct SymbolTable {
    variable_lookup: HashMap<String, VarType>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            variable_lookup: HashMap::new(),
        }
    }

    pub fn declare(&mut self, name: &str, var_type: VarType) -> Result<(), Diagnostic> {
        if self.variable_lookup.contains_key(name) {
            Err(Diagnostic::RepeatedDefinition {
                name: String::from(name),
            })
        } else {
            self.variable_lookup.insert(String::from(name), var_type);
            Ok(())
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.variable_lookup.contains_key(name)
    }

    pub fn type_of(&self, name: &str) -> Option<VarType> {
        self.variable_lookup.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.variable_lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variable_lookup.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
