//! The category table a generation run works from.
//!
//! Built once at startup, either from the builtin expression and
//! statement categories or from a JSON file, and never mutated.

use crate::config::Config;
use crate::error::AstGenError;
use crate::spec::{CategorySpec, ImportRef, NodeSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTable {
    #[serde(default)]
    pub config: Config,
    pub categories: Vec<CategorySpec>,
}

impl NodeTable {
    pub fn new(config: Config, categories: Vec<CategorySpec>) -> Self {
        Self { config, categories }
    }

    pub fn from_json_str(json: &str) -> Result<Self, AstGenError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, AstGenError> {
        let json = fs::read_to_string(path).map_err(|e| {
            AstGenError::from(e).with_note(format!("while reading '{}'", path.display()))
        })?;
        Self::from_json_str(&json).map_err(|e| e.with_note(format!("in '{}'", path.display())))
    }

    pub fn category(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Expression and statement categories of the script front-end
    pub fn builtin() -> Result<Self, AstGenError> {
        let expr = CategorySpec::new(
            "expr",
            vec![
                NodeSpec::parse("Assign", &["name: Token", "value: Box<Expr>"])?,
                NodeSpec::parse(
                    "Binary",
                    &["left: Box<Expr>", "operator: Token", "right: Box<Expr>"],
                )?,
                NodeSpec::parse(
                    "Call",
                    &["callee: Box<Expr>", "paren: Token", "args: Vec<Expr>"],
                )?,
                NodeSpec::parse("Get", &["object: Box<Expr>", "name: Token"])?,
                NodeSpec::parse("Grouping", &["expression: Box<Expr>"])?,
                NodeSpec::parse("Instantiation", &["type_: Token", "body: Box<Body>"])?,
                NodeSpec::parse("Body", &["properties: Vec<Property>"])?,
                NodeSpec::parse("Property", &["name: Token", "initializer: Box<Expr>"])?,
                NodeSpec::parse("Literal", &[])?,
                NodeSpec::parse(
                    "Logical",
                    &["left: Box<Expr>", "operator: Token", "right: Box<Expr>"],
                )?,
                NodeSpec::parse(
                    "Set",
                    &["object: Box<Expr>", "name: Token", "value: Box<Expr>"],
                )?,
                NodeSpec::parse("Unary", &["operator: Token", "right: Box<Expr>"])?,
                NodeSpec::parse("Variable", &["name: Token"])?,
            ],
        );

        let stmt = CategorySpec::new(
            "stmt",
            vec![
                NodeSpec::parse("Block", &["statements: Vec<Stmt>"])?,
                NodeSpec::parse("Expression", &["expression: Box<Expr>"])?,
                NodeSpec::parse(
                    "Function",
                    &["name: Token", "params: Vec<Token>", "body: Vec<Stmt>"],
                )?,
                NodeSpec::parse(
                    "If",
                    &[
                        "condition: Box<Expr>",
                        "then_branch: Box<Stmt>",
                        "else_branch: Option<Box<Stmt>>",
                    ],
                )?,
                NodeSpec::parse("Let", &["name: Token", "initializer: Option<Box<Expr>>"])?,
                NodeSpec::parse("Print", &["expression: Box<Expr>"])?,
                NodeSpec::parse("Return", &["keyword: Token", "value: Option<Box<Expr>>"])?,
                NodeSpec::parse("While", &["condition: Box<Expr>", "body: Box<Stmt>"])?,
            ],
        )
        .with_import(ImportRef::parse("super::expr::Expr")?);

        Ok(Self::new(Config::default(), vec![expr, stmt]))
    }
}
