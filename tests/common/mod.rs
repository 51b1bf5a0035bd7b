#![allow(dead_code)]

use astgen::{CategorySpec, CodeGenerator, Config, ImportRef, NodeSpec, NodeTable};
use quote::ToTokens;
use tempfile::TempDir;

/// Config used for the checked-in files under `tests/generated`
pub fn fixture_config() -> Config {
    Config {
        token_import: "super::token::Token".to_string(),
        ..Config::default()
    }
}

/// The small expression/statement table the checked-in files come from
pub fn fixture_table() -> NodeTable {
    let expr = CategorySpec::new(
        "expr",
        vec![
            node("Binary", &["left: Box<Expr>", "operator: Token", "right: Box<Expr>"]),
            node("Grouping", &["expression: Box<Expr>"]),
            node("Literal", &["value: Token"]),
            node("Unary", &["operator: Token", "right: Box<Expr>"]),
            node("Variable", &["name: Token"]),
        ],
    );

    let stmt = CategorySpec::new(
        "stmt",
        vec![
            node("Block", &["statements: Vec<Stmt>"]),
            node("Expression", &["expression: Box<Expr>"]),
            node(
                "If",
                &[
                    "condition: Box<Expr>",
                    "then_branch: Box<Stmt>",
                    "else_branch: Option<Box<Stmt>>",
                ],
            ),
            node("Print", &["expression: Box<Expr>"]),
        ],
    )
    .with_import(ImportRef::parse("super::expr::Expr").expect("valid import"));

    NodeTable::new(fixture_config(), vec![expr, stmt])
}

pub fn node(name: &str, fields: &[&str]) -> NodeSpec {
    NodeSpec::parse(name, fields).expect("valid node")
}

/// Generate one category with the given config, panicking on error
pub fn generate(category: &CategorySpec, config: &Config) -> String {
    CodeGenerator::with_config(config.clone())
        .generate(category)
        .unwrap_or_else(|e| panic!("generation of '{}' failed: {}", category.name, e))
}

/// Fresh directory removed when the guard drops, also on a failed assertion
pub fn scratch_dir(name: &str) -> TempDir {
    tempfile::Builder::new()
        .prefix(&format!("astgen-{}-", name))
        .tempdir()
        .expect("create scratch dir")
}

/// Parse generated text back into a syntax tree
pub fn parse_generated(text: &str) -> syn::File {
    syn::parse_file(text).unwrap_or_else(|e| panic!("generated code does not parse: {}\n{}", e, text))
}

/// Field names and normalized type tokens of a struct in a parsed file
pub fn struct_fields(file: &syn::File, name: &str) -> Vec<(String, String)> {
    let item = file
        .items
        .iter()
        .find_map(|item| match item {
            syn::Item::Struct(item) if item.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("struct {} not found", name));

    item.fields
        .iter()
        .map(|field| {
            let ident = field.ident.as_ref().expect("named field").to_string();
            (ident, field.ty.to_token_stream().to_string())
        })
        .collect()
}

/// Variant names of an enum in a parsed file
pub fn enum_variants(file: &syn::File, name: &str) -> Vec<String> {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Enum(item) if item.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("enum {} not found", name))
        .variants
        .iter()
        .map(|variant| variant.ident.to_string())
        .collect()
}

/// Method names of a trait in a parsed file
pub fn trait_methods(file: &syn::File, name: &str) -> Vec<String> {
    file.items
        .iter()
        .find_map(|item| match item {
            syn::Item::Trait(item) if item.ident == name => Some(item),
            _ => None,
        })
        .unwrap_or_else(|| panic!("trait {} not found", name))
        .items
        .iter()
        .filter_map(|item| match item {
            syn::TraitItem::Fn(method) => Some(method.sig.ident.to_string()),
            _ => None,
        })
        .collect()
}

/// Normalize a type written in the table the same way `struct_fields` does
pub fn type_tokens(text: &str) -> String {
    syn::parse_str::<syn::Type>(text)
        .expect("valid type")
        .to_token_stream()
        .to_string()
}
