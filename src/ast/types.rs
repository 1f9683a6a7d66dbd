//! Type annotations.
//!
//! The front end only parses annotations; it never checks them. An
//! annotation is one of the scalar types or a function type built from
//! other annotations.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeAnnotation {
    Int,
    Float,
    String,
    Fn(FunctionType),
}

/// `fn(int, float): string`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionType {
    pub params: Vec<TypeAnnotation>,
    pub return_type: Box<TypeAnnotation>,
}

impl TypeAnnotation {
    pub fn function(params: Vec<TypeAnnotation>, return_type: TypeAnnotation) -> Self {
        TypeAnnotation::Fn(FunctionType {
            params,
            return_type: Box::new(return_type),
        })
    }

    pub fn is_function(&self) -> bool {
        matches!(self, TypeAnnotation::Fn(_))
    }
}

impl Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::Int => write!(f, "int"),
            TypeAnnotation::Float => write!(f, "float"),
            TypeAnnotation::String => write!(f, "string"),
            TypeAnnotation::Fn(function) => write!(f, "{}", function),
        }
    }
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .params
            .iter()
            .map(|param| param.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        write!(f, "(fn {} ({}))", self.return_type, params)
    }
}
