//! Diagnostics shared by the lexer and the parser.
//!
//! This module defines the structured error values produced by both
//! passes. It includes:
//!
//! - A located diagnostic carrying the file name and the raw source line
//! - The lexical and syntax error variants
//! - Plain-text rendering with a caret under the offending column
//! - Suggestions shown alongside some errors

pub mod errors;
