//! Checks run on a category before any text is emitted.
//!
//! A category that fails here produces no output at all.

use super::utils::dispatch_method_name;
use crate::config::Config;
use crate::error::{AstGenError, ErrorKind, SpecLocation};
use crate::spec::parser::{is_identifier, parse_import_path};
use crate::spec::{CategorySpec, FieldSpec, ImportRef, NodeSpec};
use std::collections::{HashMap, HashSet};

/// Names the generated file uses itself: the visitor's generic
/// parameters and the wrappers field types are built from
const RESERVED_NAMES: &[&str] = &["T", "V", "Box", "Vec", "Option"];

/// Reject settings that would produce unusable output
pub fn validate_config(config: &Config) -> Result<(), AstGenError> {
    if !is_identifier(&config.visitor_name) {
        return Err(AstGenError::new(
            ErrorKind::ConfigError,
            format!("visitor name '{}' is not an identifier", config.visitor_name),
        ));
    }

    if !is_line_comment(&config.header) {
        return Err(AstGenError::new(
            ErrorKind::ConfigError,
            format!("header {:?} is not a line comment", config.header),
        )
        .with_help("start every header line with `//`"));
    }

    for derive in &config.derives {
        parse_import_path(derive).map_err(|_| {
            AstGenError::new(
                ErrorKind::ConfigError,
                format!("derive '{}' is not a path", derive),
            )
        })?;
    }

    ImportRef::parse(&config.token_import).map_err(|e| {
        AstGenError::new(
            ErrorKind::ConfigError,
            format!("token import '{}' is invalid", config.token_import),
        )
        .with_note(e.message)
    })?;

    Ok(())
}

/// Validate one category: names, uniqueness and field type references
pub fn validate_category(category: &CategorySpec, config: &Config) -> Result<(), AstGenError> {
    let enum_name = category.enum_name();
    if !is_identifier(&category.name) || !is_identifier(&enum_name) {
        return Err(AstGenError::new(
            ErrorKind::InvalidIdentifier,
            format!("category name '{}' is not an identifier", category.name),
        ));
    }

    let imported = imported_names(category, config)?;
    let nodes = node_names(category, config, &enum_name, &imported)?;

    for node in &category.nodes {
        validate_fields(category, node, config, &enum_name, &nodes, &imported)?;
    }

    Ok(())
}

/// Names brought in by `use` lines, including the token type
fn imported_names<'a>(
    category: &'a CategorySpec,
    config: &'a Config,
) -> Result<HashSet<&'a str>, AstGenError> {
    let mut names = HashSet::new();
    names.insert(config.token_name());

    for import in &category.extra_imports {
        let name = import.imported_name();
        if !names.insert(name) {
            return Err(AstGenError::new(
                ErrorKind::NameCollision,
                format!("'{}' is imported more than once", name),
            )
            .with_location(SpecLocation::category(&category.name))
            .with_note(format!("offending import: {}", import)));
        }
    }

    Ok(names)
}

/// Node names of the category, checked for shape and uniqueness
fn node_names<'a>(
    category: &'a CategorySpec,
    config: &Config,
    enum_name: &str,
    imported: &HashSet<&str>,
) -> Result<HashSet<&'a str>, AstGenError> {
    let mut names = HashSet::new();
    // visit_* method name -> node that claimed it
    let mut methods: HashMap<String, &str> = HashMap::new();

    for node in &category.nodes {
        let location = SpecLocation::category(&category.name).with_node(&node.name);

        if !is_type_name(&node.name) {
            return Err(AstGenError::new(
                ErrorKind::InvalidIdentifier,
                format!("node name '{}' is not a capitalized identifier", node.name),
            )
            .with_location(location));
        }

        if !names.insert(node.name.as_str()) {
            return Err(AstGenError::new(
                ErrorKind::DuplicateNode,
                format!("node '{}' is declared more than once", node.name),
            )
            .with_location(location)
            .with_help("every node name in a category must be unique"));
        }

        if node.name == enum_name
            || node.name == config.visitor_name
            || imported.contains(node.name.as_str())
            || RESERVED_NAMES.contains(&node.name.as_str())
        {
            return Err(AstGenError::new(
                ErrorKind::NameCollision,
                format!(
                    "node '{}' clashes with a type already in scope of the generated file",
                    node.name
                ),
            )
            .with_location(location));
        }

        let method = dispatch_method_name(&node.name);
        if let Some(previous) = methods.insert(method.clone(), &node.name) {
            return Err(AstGenError::new(
                ErrorKind::NameCollision,
                format!(
                    "nodes '{}' and '{}' both dispatch to '{}'",
                    previous, node.name, method
                ),
            )
            .with_location(location));
        }
    }

    Ok(names)
}

fn validate_fields(
    category: &CategorySpec,
    node: &NodeSpec,
    config: &Config,
    enum_name: &str,
    nodes: &HashSet<&str>,
    imported: &HashSet<&str>,
) -> Result<(), AstGenError> {
    let mut seen = HashSet::new();

    for field in &node.fields {
        let location = SpecLocation::category(&category.name)
            .with_node(&node.name)
            .with_field(&field.name);

        if !is_identifier(&field.name) {
            return Err(AstGenError::new(
                ErrorKind::InvalidIdentifier,
                format!("field name '{}' is not an identifier", field.name),
            )
            .with_location(location));
        }

        if !seen.insert(field.name.as_str()) {
            return Err(AstGenError::new(
                ErrorKind::DuplicateField,
                format!("field '{}' is declared more than once", field.name),
            )
            .with_location(location));
        }

        validate_field_type(field, config, enum_name, nodes, imported)
            .map_err(|e| e.with_location(location))?;
    }

    Ok(())
}

fn validate_field_type(
    field: &FieldSpec,
    config: &Config,
    enum_name: &str,
    nodes: &HashSet<&str>,
    imported: &HashSet<&str>,
) -> Result<(), AstGenError> {
    let (name, indirect) = field.type_expr.leaf();
    let token = config.token_name();

    let generated = name == enum_name
        || nodes.contains(name)
        || (imported.contains(name) && name != token);

    if generated {
        if !indirect {
            return Err(AstGenError::new(
                ErrorKind::MissingIndirection,
                format!(
                    "'{}' refers to node type '{}' without indirection",
                    field.type_expr, name
                ),
            )
            .with_help(format!("use Box<{0}> or Vec<{0}>", name)));
        }
        return Ok(());
    }

    if name == token || config.is_extern_type(name) {
        return Ok(());
    }

    Err(AstGenError::new(
        ErrorKind::UnknownType,
        format!("unknown type '{}'", name),
    )
    .with_help("declare it as a node, import it from another category, or list it in extern_types"))
}

fn is_line_comment(text: &str) -> bool {
    !text.trim().is_empty() && text.lines().all(|line| line.trim_start().starts_with("//"))
}

fn is_type_name(name: &str) -> bool {
    is_identifier(name) && name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
