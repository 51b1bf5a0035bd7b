//! Rust source generation from node tables.
//!
//! Orchestrates validation and the enum, node type and visitor emitters
//! for one category at a time, and hands the result to the writer.

mod enums;
mod formatting;
mod types;
mod utils;
pub mod validation;
mod visitor;

pub use formatting::{align_labels, Alignment};
pub use utils::dispatch_method_name;

use crate::config::Config;
use crate::debug_println;
use crate::error::{AstGenError, ErrorCollection, ErrorKind, SpecLocation};
use crate::layout::OutputLayout;
use crate::spec::{CategorySpec, ImportRef};
use crate::writer::write_atomic;
use std::collections::HashSet;
use std::path::PathBuf;

pub struct CodeGenerator {
    output: String,
    indent_level: usize,
    config: Config,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    /// Generate the complete file text for one category.
    ///
    /// The category is validated first; on error nothing is emitted.
    pub fn generate(&mut self, category: &CategorySpec) -> Result<String, AstGenError> {
        self.output.clear();
        self.indent_level = 0;

        validation::validate_config(&self.config)?;
        validation::validate_category(category, &self.config)?;
        debug_println!(
            "generating category '{}' ({} nodes)",
            category.name,
            category.nodes.len()
        );

        let token = ImportRef::parse(&self.config.token_import)?;
        self.generate_header(category, &token);

        self.output.push('\n');
        self.generate_enum(category);

        for node in &category.nodes {
            debug_println!("  node {}", node.name);
            self.output.push('\n');
            self.generate_node_type(node);
            if self.config.constructors {
                self.output.push('\n');
                self.generate_constructor(category, node);
            }
        }

        self.output.push('\n');
        self.generate_visitor(category);

        if self.config.accept {
            self.output.push('\n');
            self.generate_accept(category);
        }

        Ok(std::mem::take(&mut self.output))
    }

    /// Generate one category and write it to its file in `layout`
    pub fn generate_to(
        &mut self,
        category: &CategorySpec,
        layout: &OutputLayout,
    ) -> Result<PathBuf, AstGenError> {
        let text = self.generate(category)?;
        let path = layout.path_for(category);
        write_atomic(&path, &text)
            .map_err(|e| e.with_location(SpecLocation::category(&category.name)))?;
        Ok(path)
    }

    /// Generate every category, continuing past failed ones
    pub fn generate_all(
        &mut self,
        categories: &[CategorySpec],
        layout: &OutputLayout,
    ) -> GenerationReport {
        let mut report = GenerationReport::default();
        let mut stems = HashSet::new();

        for category in categories {
            if !stems.insert(category.file_stem()) {
                report.errors.add_error(
                    AstGenError::new(
                        ErrorKind::NameCollision,
                        format!(
                            "another category already writes '{}'",
                            layout.path_for(category).display()
                        ),
                    )
                    .with_location(SpecLocation::category(&category.name)),
                );
                continue;
            }

            match self.generate_to(category, layout) {
                Ok(path) => report.written.push(path),
                Err(e) => {
                    debug_println!("category '{}' failed: {}", category.name, e);
                    report.errors.add_error(e);
                }
            }
        }

        report
    }

    fn generate_header(&mut self, category: &CategorySpec, token: &ImportRef) {
        let header = self.config.header.clone();
        self.line(&header);
        self.output.push('\n');

        for import in &category.extra_imports {
            self.line(&format!("use {};", import));
        }
        self.line(&format!("use {};", token));
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a full generation run
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<PathBuf>,
    pub errors: ErrorCollection,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        !self.errors.has_errors()
    }
}
