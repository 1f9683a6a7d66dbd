use super::{ast::Expr, types::TypeAnnotation};

/// Variable Declaration
/// `let [mut] name: type [= value]`. A missing initializer is stored as a
/// `nil` literal.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclExpr {
    pub name: String,
    pub type_annotation: TypeAnnotation,
    pub is_mutable: bool,
    pub value: Box<Expr>,
}

impl VarDeclExpr {
    pub fn new(name: String, type_annotation: TypeAnnotation, is_mutable: bool, value: Expr) -> Self {
        VarDeclExpr {
            name,
            type_annotation,
            is_mutable,
            value: Box::new(value),
        }
    }
}

/// If Expression
///
/// `else_ifs` hold one nested `IfExpr` per `else if` clause; those never
/// carry clauses of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Box<Expr>,
    pub body: Vec<Expr>,
    pub else_ifs: Vec<IfExpr>,
    pub else_body: Vec<Expr>,
}

impl IfExpr {
    pub fn new(condition: Expr, body: Vec<Expr>, else_ifs: Vec<IfExpr>, else_body: Vec<Expr>) -> Self {
        debug_assert!(
            else_ifs
                .iter()
                .all(|clause| clause.else_ifs.is_empty() && clause.else_body.is_empty()),
            "else if clauses cannot have clauses of their own"
        );
        IfExpr {
            condition: Box::new(condition),
            body,
            else_ifs,
            else_body,
        }
    }

    /// An `else if` clause.
    pub fn clause(condition: Expr, body: Vec<Expr>) -> Self {
        IfExpr::new(condition, body, vec![], vec![])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileExpr {
    pub condition: Box<Expr>,
    pub body: Vec<Expr>,
}

impl WhileExpr {
    pub fn new(condition: Expr, body: Vec<Expr>) -> Self {
        WhileExpr {
            condition: Box::new(condition),
            body,
        }
    }
}

/// A function parameter: always a name paired with an annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub type_annotation: TypeAnnotation,
}

impl Param {
    pub fn new(name: String, type_annotation: TypeAnnotation) -> Self {
        Param {
            name,
            type_annotation,
        }
    }
}

/// Function Expression
/// An anonymous function literal. Named declarations are desugared by the
/// parser into a `VarDeclExpr` holding one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub params: Vec<Param>,
    pub body: Vec<Expr>,
    pub return_type: TypeAnnotation,
}

impl FnExpr {
    pub fn new(params: Vec<Param>, body: Vec<Expr>, return_type: TypeAnnotation) -> Self {
        FnExpr {
            params,
            body,
            return_type,
        }
    }

    /// The annotation a binding of this function carries.
    pub fn get_type(&self) -> TypeAnnotation {
        TypeAnnotation::function(
            self.params
                .iter()
                .map(|param| param.type_annotation.clone())
                .collect(),
            self.return_type.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnExpr {
    pub value: Box<Expr>,
}

impl ReturnExpr {
    pub fn new(value: Expr) -> Self {
        ReturnExpr {
            value: Box::new(value),
        }
    }
}
