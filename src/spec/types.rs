//! Field type expressions.
//!
//! A field type is a single named type, optionally wrapped in `Box`,
//! `Vec` or `Option`. Rendering is canonical so that a table written in
//! canonical form regenerates byte-identical output.

use crate::error::AstGenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeExpr {
    /// Token, primitive, or a reference to a generated type
    Named(String),
    /// `Box<T>`: owning indirection
    Boxed(Box<TypeExpr>),
    /// `Vec<T>`: homogeneous ordered collection
    List(Box<TypeExpr>),
    /// `Option<T>`
    Optional(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn boxed(inner: TypeExpr) -> Self {
        TypeExpr::Boxed(Box::new(inner))
    }

    pub fn list(inner: TypeExpr) -> Self {
        TypeExpr::List(Box::new(inner))
    }

    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::Optional(Box::new(inner))
    }

    /// The named type at the bottom of the wrappers, and whether a heap
    /// indirection (`Box` or `Vec`) sits anywhere above it
    pub fn leaf(&self) -> (&str, bool) {
        match self {
            TypeExpr::Named(name) => (name, false),
            TypeExpr::Boxed(inner) | TypeExpr::List(inner) => (inner.leaf().0, true),
            TypeExpr::Optional(inner) => inner.leaf(),
        }
    }

    /// Parameter type a constructor takes for a field of this type
    pub fn constructor_param(&self) -> &TypeExpr {
        match self {
            TypeExpr::Boxed(inner) => inner,
            other => other,
        }
    }

    pub fn is_boxed(&self) -> bool {
        matches!(self, TypeExpr::Boxed(_))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::Boxed(inner) => write!(f, "Box<{}>", inner),
            TypeExpr::List(inner) => write!(f, "Vec<{}>", inner),
            TypeExpr::Optional(inner) => write!(f, "Option<{}>", inner),
        }
    }
}

impl FromStr for TypeExpr {
    type Err = AstGenError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        super::parser::parse_type_expr(text)
    }
}

impl TryFrom<String> for TypeExpr {
    type Error = AstGenError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<TypeExpr> for String {
    fn from(type_expr: TypeExpr) -> Self {
        type_expr.to_string()
    }
}
