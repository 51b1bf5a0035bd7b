//! Code generation utilities.
//!
//! Indentation, derive attributes and dispatch method naming.

use super::CodeGenerator;

/// Name of the visitor method for a node: `Assign` -> `visit_assign`
pub fn dispatch_method_name(node_name: &str) -> String {
    format!("visit_{}", node_name.to_lowercase())
}

impl CodeGenerator {
    /// Adds the current indentation level to the output
    pub(super) fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str("    ");
        }
    }

    /// Writes one indented line
    pub(super) fn line(&mut self, text: &str) {
        self.indent();
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub(super) fn generate_derives(&mut self) {
        if self.config.derives.is_empty() {
            return;
        }
        let derives = self.config.derives.join(", ");
        self.line(&format!("#[derive({})]", derives));
    }

    pub(super) fn field_visibility(&self) -> &'static str {
        if self.config.public_fields {
            "pub "
        } else {
            ""
        }
    }
}
