//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using an ordered table of regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line/column tracking and the raw line table used by diagnostics
//! - Per-line collection of lexical errors

pub mod lexer;
pub mod tokens;
