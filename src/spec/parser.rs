//! Parsing of the textual forms used in node tables.
//!
//! Type expressions and import paths go through `syn`, so anything the
//! table accepts is well-formed Rust syntax.

use super::types::TypeExpr;
use crate::error::{AstGenError, ErrorKind, IntoAstGenError};
use nonempty::NonEmpty;
use quote::ToTokens;
use syn::{AngleBracketedGenericArguments, GenericArgument, PathArguments, Type};

/// Parse a field type such as `Box<Expr>` or `Vec<Token>`
pub fn parse_type_expr(text: &str) -> Result<TypeExpr, AstGenError> {
    let trimmed = text.trim();
    let ty: Type = syn::parse_str(trimmed).map_err(|e| {
        format!("'{}' is not a Rust type: {}", trimmed, e).into_type_error()
    })?;
    convert_type(&ty)
}

fn convert_type(ty: &Type) -> Result<TypeExpr, AstGenError> {
    let type_path = match ty {
        Type::Path(type_path) => type_path,
        Type::Paren(paren) => return convert_type(&paren.elem),
        _ => return Err(unsupported(ty)),
    };

    let path = &type_path.path;
    if type_path.qself.is_some() || path.leading_colon.is_some() || path.segments.len() != 1 {
        return Err(unsupported(ty));
    }

    let segment = &path.segments[0];
    let name = segment.ident.to_string();

    match &segment.arguments {
        PathArguments::None => Ok(TypeExpr::Named(name)),
        PathArguments::AngleBracketed(args) => {
            let inner = single_type_argument(args).ok_or_else(|| unsupported(ty))?;
            let inner = Box::new(convert_type(inner)?);
            match name.as_str() {
                "Box" => Ok(TypeExpr::Boxed(inner)),
                "Vec" => Ok(TypeExpr::List(inner)),
                "Option" => Ok(TypeExpr::Optional(inner)),
                _ => Err(unsupported(ty)),
            }
        }
        PathArguments::Parenthesized(_) => Err(unsupported(ty)),
    }
}

fn single_type_argument(args: &AngleBracketedGenericArguments) -> Option<&Type> {
    if args.args.len() != 1 {
        return None;
    }
    match args.args.first()? {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    }
}

fn unsupported(ty: &Type) -> AstGenError {
    AstGenError::new(
        ErrorKind::InvalidTypeExpr,
        format!(
            "unsupported type expression '{}'",
            ty.to_token_stream()
        ),
    )
    .with_help("use a single type name, optionally wrapped in Box<..>, Vec<..> or Option<..>")
}

/// Split the compact `"name: Type"` field form
pub fn parse_field(text: &str) -> Result<(String, TypeExpr), AstGenError> {
    let (name, type_text) = text.split_once(':').ok_or_else(|| {
        AstGenError::new(
            ErrorKind::InvalidTypeExpr,
            format!("field '{}' has no type", text.trim()),
        )
        .with_help("write fields as \"name: Type\"")
    })?;

    Ok((name.trim().to_string(), parse_type_expr(type_text)?))
}

/// Parse a `use` path such as `super::expr::Expr` into its segments
pub fn parse_import_path(text: &str) -> Result<NonEmpty<String>, AstGenError> {
    let trimmed = text.trim();
    let invalid = |reason: String| {
        AstGenError::new(
            ErrorKind::InvalidImport,
            format!("invalid import '{}': {}", trimmed, reason),
        )
    };

    let path: syn::Path = syn::parse_str(trimmed).map_err(|e| invalid(e.to_string()))?;
    if path
        .segments
        .iter()
        .any(|segment| !segment.arguments.is_none())
    {
        return Err(invalid("generic arguments are not allowed".to_string()));
    }

    let mut segments: Vec<String> = path
        .segments
        .iter()
        .map(|segment| segment.ident.to_string())
        .collect();
    if path.leading_colon.is_some() {
        if let Some(first) = segments.first_mut() {
            first.insert_str(0, "::");
        }
    }

    NonEmpty::from_vec(segments).ok_or_else(|| invalid("empty path".to_string()))
}

/// Check that a name is a usable Rust identifier (keywords are rejected)
pub fn is_identifier(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}
