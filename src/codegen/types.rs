//! Node type emission.
//!
//! One struct per node with its fields aligned, plus an optional `new`
//! helper that wraps the struct in its category variant.

use super::formatting::Alignment;
use super::CodeGenerator;
use crate::spec::{CategorySpec, NodeSpec};

impl CodeGenerator {
    /// Generate the data type carried by one variant
    pub(super) fn generate_node_type(&mut self, node: &NodeSpec) {
        self.generate_derives();

        if node.is_marker() {
            self.line(&format!("pub struct {} {{}}", node.name));
            return;
        }

        self.line(&format!("pub struct {} {{", node.name));
        self.indent_level += 1;

        // Alignment is per node, not per category
        let alignment = Alignment::over(node.fields.iter().map(|field| &field.name));
        let visibility = self.field_visibility();
        for field in &node.fields {
            let label = alignment.pad_after(&field.name, ":");
            self.line(&format!("{}{} {},", visibility, label, field.type_expr));
        }

        self.indent_level -= 1;
        self.line("}");
    }

    /// Generate `impl Node { pub fn new(..) -> Category }`
    pub(super) fn generate_constructor(&mut self, category: &CategorySpec, node: &NodeSpec) {
        let enum_name = category.enum_name();
        let params: Vec<String> = node
            .fields
            .iter()
            .map(|field| format!("{}: {}", field.name, field.type_expr.constructor_param()))
            .collect();

        self.line(&format!("impl {} {{", node.name));
        self.indent_level += 1;
        self.line(&format!(
            "pub fn new({}) -> {} {{",
            params.join(", "),
            enum_name
        ));
        self.indent_level += 1;

        if node.is_marker() {
            self.line(&format!("{}::{}(Self {{}})", enum_name, node.name));
        } else {
            self.line(&format!("{}::{}(Self {{", enum_name, node.name));
            self.indent_level += 1;

            let alignment = Alignment::over(node.fields.iter().map(|field| &field.name));
            for field in &node.fields {
                if field.type_expr.is_boxed() {
                    let label = alignment.pad_after(&field.name, ":");
                    self.line(&format!("{} Box::new({}),", label, field.name));
                } else {
                    self.line(&format!("{},", field.name));
                }
            }

            self.indent_level -= 1;
            self.line("})");
        }

        self.indent_level -= 1;
        self.line("}");
        self.indent_level -= 1;
        self.line("}");
    }
}
