use serde::{Deserialize, Serialize};

/// Generator settings shared by every category of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generated-sources directory, relative to the workspace root unless absolute
    pub output_dir: String,
    /// Path of the opaque token type every file imports
    pub token_import: String,
    /// Warning comment written on the first line of every file
    pub header: String,
    pub derives: Vec<String>,
    pub public_fields: bool,
    /// Emit `new` helpers that wrap a node in its category variant
    pub constructors: bool,
    /// Emit an `accept` method dispatching to the visitor
    pub accept: bool,
    pub visitor_name: String,
    /// Names usable as field types without an import
    pub extern_types: Vec<String>,
}

impl Config {
    /// Name the token type is referenced by in field types
    pub fn token_name(&self) -> &str {
        self.token_import
            .rsplit("::")
            .next()
            .unwrap_or(&self.token_import)
            .trim()
    }

    pub fn is_extern_type(&self, name: &str) -> bool {
        self.extern_types.iter().any(|t| t == name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: "src/script/ast".to_string(),
            token_import: "crate::script::tokens::Token".to_string(),
            header: "// Auto generated code. Edit the astgen node table instead".to_string(),
            derives: vec![
                "Debug".to_string(),
                "Clone".to_string(),
                "PartialEq".to_string(),
            ],
            public_fields: true,
            constructors: true,
            accept: true,
            visitor_name: "Visitor".to_string(),
            extern_types: [
                "bool", "char", "f32", "f64", "i8", "i16", "i32", "i64", "i128", "isize", "u8",
                "u16", "u32", "u64", "u128", "usize", "String",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
        }
    }
}
