//! Diagnostic types and reporting for the analyzer.
//!
//! This module defines the findings the analyzer can emit. It includes:
//!
//! - One diagnostic variant per user-visible message
//! - An ordered, append-only collector filled during analysis
//! - The report type returned to callers, with rendered message texts

pub mod diagnostics;

#[cfg(test)]
mod tests;
