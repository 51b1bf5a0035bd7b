//! Declarative model of AST categories, nodes and fields.
//!
//! A table of `CategorySpec`s is the single source of truth for the
//! generated files. Specs are plain immutable data; all checking happens
//! in the generator before any text is produced.

pub mod parser;
pub mod types;

pub use types::TypeExpr;

use crate::error::AstGenError;
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One field of a node: a name and its type expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FieldRepr")]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_expr: TypeExpr,
}

/// Either `"name: Type"` or `{ "name": .., "type": .. }` in a JSON table
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldRepr {
    Compact(String),
    Full {
        name: String,
        #[serde(rename = "type")]
        type_expr: TypeExpr,
    },
}

impl TryFrom<FieldRepr> for FieldSpec {
    type Error = AstGenError;

    fn try_from(repr: FieldRepr) -> Result<Self, Self::Error> {
        match repr {
            FieldRepr::Compact(text) => FieldSpec::parse(&text),
            FieldRepr::Full { name, type_expr } => Ok(FieldSpec::new(name, type_expr)),
        }
    }
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_expr,
        }
    }

    /// Parse the compact `"name: Type"` form
    pub fn parse(text: &str) -> Result<Self, AstGenError> {
        let (name, type_expr) = parser::parse_field(text)?;
        Ok(Self { name, type_expr })
    }
}

/// One syntax construct: the enum variant and the struct it wraps share `name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl NodeSpec {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Build a node from compact field strings, e.g. `["name: Token"]`
    pub fn parse(name: impl Into<String>, fields: &[&str]) -> Result<Self, AstGenError> {
        let fields = fields
            .iter()
            .map(|field| FieldSpec::parse(field))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, fields))
    }

    pub fn is_marker(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A `use` path that brings another category's types into scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImportRef {
    segments: NonEmpty<String>,
}

impl ImportRef {
    pub fn parse(text: &str) -> Result<Self, AstGenError> {
        Ok(Self {
            segments: parser::parse_import_path(text)?,
        })
    }

    /// The name the import makes available
    pub fn imported_name(&self) -> &str {
        self.segments.last()
    }
}

impl fmt::Display for ImportRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path: Vec<&str> = self.segments.iter().map(String::as_str).collect();
        f.write_str(&path.join("::"))
    }
}

impl TryFrom<String> for ImportRef {
    type Error = AstGenError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<ImportRef> for String {
    fn from(import: ImportRef) -> Self {
        import.to_string()
    }
}

/// A group of nodes generated into one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub nodes: Vec<NodeSpec>,
    #[serde(default, rename = "imports")]
    pub extra_imports: Vec<ImportRef>,
}

impl CategorySpec {
    pub fn new(name: impl Into<String>, nodes: Vec<NodeSpec>) -> Self {
        Self {
            name: name.into(),
            nodes,
            extra_imports: Vec::new(),
        }
    }

    pub fn with_import(mut self, import: ImportRef) -> Self {
        self.extra_imports.push(import);
        self
    }

    /// Name of the generated sum type: `expr` -> `Expr`, `type_expr` -> `TypeExpr`
    pub fn enum_name(&self) -> String {
        self.name
            .split('_')
            .filter(|part| !part.is_empty())
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect()
    }

    /// Base name of the generated file
    pub fn file_stem(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn node(&self, name: &str) -> Option<&NodeSpec> {
        self.nodes.iter().find(|node| node.name == name)
    }
}
