//! Sum type emission and visitor dispatch.

use super::formatting::Alignment;
use super::utils::dispatch_method_name;
use super::CodeGenerator;
use crate::spec::CategorySpec;

impl CodeGenerator {
    /// Generate the category enum, one variant per node in table order
    pub(super) fn generate_enum(&mut self, category: &CategorySpec) {
        let enum_name = category.enum_name();
        self.generate_derives();

        if category.nodes.is_empty() {
            self.line(&format!("pub enum {} {{}}", enum_name));
            return;
        }

        self.line(&format!("pub enum {} {{", enum_name));
        self.indent_level += 1;

        let alignment = Alignment::over(category.nodes.iter().map(|node| &node.name));
        for node in &category.nodes {
            let label = alignment.pad(&node.name, "(");
            self.line(&format!("{}{}),", label, node.name));
        }

        self.indent_level -= 1;
        self.line("}");
    }

    /// Generate `accept`, routing each variant to its visitor method
    pub(super) fn generate_accept(&mut self, category: &CategorySpec) {
        let enum_name = category.enum_name();
        let visitor_name = self.config.visitor_name.clone();

        self.line(&format!("impl {} {{", enum_name));
        self.indent_level += 1;
        self.line(&format!(
            "pub fn accept<T, V: {}<T> + ?Sized>(&self, visitor: &mut V) -> T {{",
            visitor_name
        ));
        self.indent_level += 1;

        if category.nodes.is_empty() {
            self.line("match *self {}");
        } else {
            self.line("match self {");
            self.indent_level += 1;

            let patterns: Vec<String> = category
                .nodes
                .iter()
                .map(|node| format!("{}::{}(x)", enum_name, node.name))
                .collect();
            let alignment = Alignment::over(&patterns);
            for (pattern, node) in patterns.iter().zip(&category.nodes) {
                self.line(&format!(
                    "{}=> visitor.{}(x),",
                    alignment.pad(pattern, " "),
                    dispatch_method_name(&node.name)
                ));
            }

            self.indent_level -= 1;
            self.line("}");
        }

        self.indent_level -= 1;
        self.line("}");
        self.indent_level -= 1;
        self.line("}");
    }
}
