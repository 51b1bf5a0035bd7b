//! Error type hierarchy for the AST generator
//!
//! Every failure of a generation run is an `AstGenError`: a kind, a
//! message, and optional context pointing back into the node table.

mod conversions;

pub use conversions::IntoAstGenError;

use colored::*;
use std::fmt;

/// Position of an error inside the node table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLocation {
    pub category: String,
    pub node: Option<String>,
    pub field: Option<String>,
}

impl SpecLocation {
    pub fn category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            node: None,
            field: None,
        }
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

impl fmt::Display for SpecLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)?;
        if let Some(node) = &self.node {
            write!(f, "::{}", node)?;
        }
        if let Some(field) = &self.field {
            write!(f, ".{}", field)?;
        }
        Ok(())
    }
}

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub location: Option<SpecLocation>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main error type for the generator
#[derive(Debug, Clone)]
pub struct AstGenError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl AstGenError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_location(mut self, location: SpecLocation) -> Self {
        self.context.location = Some(location);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// Whether the error was raised while checking the node table
    pub fn is_validation_error(&self) -> bool {
        self.kind.is_validation()
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Node table errors
    DuplicateNode,
    DuplicateField,
    NameCollision,
    InvalidIdentifier,
    InvalidTypeExpr,
    UnknownType,
    MissingIndirection,
    InvalidImport,

    // Table and config loading
    ConfigError,

    // IO errors
    IoError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateNode => "duplicate node",
            ErrorKind::DuplicateField => "duplicate field",
            ErrorKind::NameCollision => "name collision",
            ErrorKind::InvalidIdentifier => "invalid identifier",
            ErrorKind::InvalidTypeExpr => "invalid type expression",
            ErrorKind::UnknownType => "unknown type",
            ErrorKind::MissingIndirection => "missing indirection",
            ErrorKind::InvalidImport => "invalid import",
            ErrorKind::ConfigError => "config error",
            ErrorKind::IoError => "I/O error",
        }
    }

    pub fn is_validation(&self) -> bool {
        !matches!(self, ErrorKind::ConfigError | ErrorKind::IoError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AstGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.location {
            Some(location) => write!(f, "{}: {}: {}", location, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

/// Renders an error for the terminal
pub struct ErrorFormatter<'a> {
    error: &'a AstGenError,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a AstGenError) -> Self {
        Self {
            error,
            use_color: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(location) = &self.error.context.location {
            let location = location.to_string();
            output.push_str(&if self.use_color {
                location.bold().to_string()
            } else {
                location
            });
            output.push_str(": ");
        }

        let error_kind = self.error.kind.to_string();
        let error_label = if self.use_color {
            error_kind.red().bold().to_string()
        } else {
            error_kind
        };

        output.push_str(&format!("{}: {}", error_label, self.error.message));

        if let Some(note) = &self.error.context.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = if self.use_color {
                "help".green().bold()
            } else {
                "help".into()
            };
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }
}

impl std::error::Error for AstGenError {}

/// Errors gathered across a whole generation run
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<AstGenError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, error: AstGenError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[AstGenError] {
        &self.errors
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }

        if !self.is_empty() {
            write!(f, "\n{} error(s)", self.error_count())?;
        }

        Ok(())
    }
}
