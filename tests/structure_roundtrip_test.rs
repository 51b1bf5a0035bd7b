//! Generated files parsed back with syn must mirror the node table

mod common;

use astgen::codegen::dispatch_method_name;
use astgen::{CategorySpec, Config, NodeTable};
use common::{
    enum_variants, generate, node, parse_generated, struct_fields, trait_methods, type_tokens,
};

fn check_category(category: &CategorySpec, config: &Config) {
    let text = generate(category, config);
    let file = parse_generated(&text);
    let enum_name = category.enum_name();

    let node_names: Vec<String> = category.nodes.iter().map(|n| n.name.clone()).collect();
    assert_eq!(enum_variants(&file, &enum_name), node_names);

    let methods: Vec<String> = category
        .nodes
        .iter()
        .map(|n| dispatch_method_name(&n.name))
        .collect();
    assert_eq!(trait_methods(&file, &config.visitor_name), methods);

    for node in &category.nodes {
        let expected: Vec<(String, String)> = node
            .fields
            .iter()
            .map(|f| (f.name.clone(), type_tokens(&f.type_expr.to_string())))
            .collect();
        assert_eq!(
            struct_fields(&file, &node.name),
            expected,
            "fields of {}",
            node.name
        );
    }
}

#[test]
fn test_builtin_table_round_trips() {
    let table = NodeTable::builtin().unwrap();
    for category in &table.categories {
        check_category(category, &table.config);
    }
}

#[test]
fn test_round_trip_with_private_fields_and_no_helpers() {
    let table = NodeTable::builtin().unwrap();
    let config = Config {
        public_fields: false,
        constructors: false,
        accept: false,
        derives: vec![],
        ..table.config.clone()
    };
    for category in &table.categories {
        check_category(category, &config);
    }
}

#[test]
fn test_field_text_is_reproduced_verbatim() {
    let category = CategorySpec::new(
        "expr",
        vec![node(
            "Call",
            &[
                "callee: Box<Expr>",
                "args: Vec<Expr>",
                "label: Option<Box<Expr>>",
                "arity: usize",
            ],
        )],
    );
    let text = generate(&category, &Config::default());

    for line in [
        "    pub callee: Box<Expr>,",
        "    pub args:   Vec<Expr>,",
        "    pub label:  Option<Box<Expr>>,",
        "    pub arity:  usize,",
    ] {
        assert!(text.lines().any(|l| l == line), "missing {:?} in\n{}", line, text);
    }
}

#[test]
fn test_variant_columns_line_up() {
    let table = NodeTable::builtin().unwrap();
    let expr = table.category("expr").unwrap();
    let text = generate(expr, &table.config);

    let columns: Vec<usize> = text
        .lines()
        .skip_while(|line| !line.starts_with("pub enum Expr"))
        .skip(1)
        .take_while(|line| *line != "}")
        .map(|line| line.find('(').unwrap())
        .collect();

    assert_eq!(columns.len(), expr.nodes.len());
    // Four spaces of indent plus the longest name, `Instantiation`
    assert!(columns.iter().all(|&c| c == 4 + "Instantiation".len()));
}

#[test]
fn test_empty_category_parses() {
    let category = CategorySpec::new("expr", vec![]);
    let file = parse_generated(&generate(&category, &Config::default()));
    assert!(enum_variants(&file, "Expr").is_empty());
    assert!(trait_methods(&file, "Visitor").is_empty());
}
