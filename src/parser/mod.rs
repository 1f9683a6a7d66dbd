//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a list of top-level expressions. Each grammar rule
//! is one function that defers to the next tighter rule:
//!
//! `return → while → if → let → fn → assignment → equality → comparison →
//! term → factor → unary → call → primary`
//!
//! It handles:
//!
//! - Declarations and control flow (`let`, `fn`, `if`, `while`, `return`)
//! - Operator precedence through layered binary rules
//! - Type annotations
//! - Error recovery by resynchronising at statement keywords

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
