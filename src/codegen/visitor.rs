//! Visitor trait emission.

use super::formatting::Alignment;
use super::utils::dispatch_method_name;
use super::CodeGenerator;
use crate::spec::CategorySpec;

impl CodeGenerator {
    /// Generate `trait Visitor<T>` with one method per node.
    ///
    /// Method names and parameter types are padded into columns; the
    /// padding is cosmetic and never changes the signatures.
    pub(super) fn generate_visitor(&mut self, category: &CategorySpec) {
        let visitor_name = self.config.visitor_name.clone();

        if category.nodes.is_empty() {
            self.line(&format!("pub trait {}<T> {{}}", visitor_name));
            return;
        }

        self.line(&format!("pub trait {}<T> {{", visitor_name));
        self.indent_level += 1;

        let methods: Vec<String> = category
            .nodes
            .iter()
            .map(|node| dispatch_method_name(&node.name))
            .collect();
        let method_alignment = Alignment::over(&methods);
        let type_alignment = Alignment::over(category.nodes.iter().map(|node| &node.name));

        for (method, node) in methods.iter().zip(&category.nodes) {
            self.line(&format!(
                "fn {}&mut self, x: &{} -> T;",
                method_alignment.pad(method, "("),
                type_alignment.pad_after(&node.name, ")")
            ));
        }

        self.indent_level -= 1;
        self.line("}");
    }
}
