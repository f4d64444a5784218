//! Program analysis module.
//!
//! This module contains the validators that check a token sequence
//! against the fixed program shape, and the driver tying them together:
//!
//! - The Analyzer context owning cursor, symbol table and diagnostics
//! - Declaration validation and symbol registration ('var' ... 'begin')
//! - Structural validation of the realization body ('begin' ... 'end')
//! - The `analyze` entry point producing a Report

pub mod analyzer;
pub mod declarations;
pub mod realization;
pub mod symbols;
