pub mod codegen;
pub mod config;
pub mod debug;
pub mod error;
pub mod layout;
pub mod spec;
pub mod table;
pub mod writer;


pub use codegen::{CodeGenerator, GenerationReport};
pub use config::Config;
pub use error::{AstGenError, ErrorCollection, ErrorKind};
pub use layout::OutputLayout;
pub use spec::{CategorySpec, FieldSpec, ImportRef, NodeSpec, TypeExpr};
pub use table::NodeTable;
