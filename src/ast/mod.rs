/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The closed `Expr` enum and its dispatch
/// - expressions: Operator, literal, grouping, assignment and call nodes
/// - statements: Declaration and control-flow nodes
/// - types: Type annotations
/// - visitor: The visitor contract and the S-expression printer
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
pub mod visitor;

#[cfg(test)]
mod tests;
