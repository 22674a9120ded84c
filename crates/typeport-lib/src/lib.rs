//! Typeport: TypeScript declarations from Go type syntax.
//!
//! # Example
//!
//! ```
//! use typeport_lib::typegen::typescript::{Config, emit_declarations};
//!
//! let source = r#"
//!     package models
//!
//!     type User struct {
//!         Name  string
//!         Email *string
//!     }
//! "#;
//!
//! let declarations = typeport_lib::parse(source).expect("valid Go");
//! let (ts, unknown) = emit_declarations(&declarations, &Config::new().start_modifier("export"));
//! assert!(ts.starts_with("export interface User {"));
//! assert!(unknown.is_empty());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod go;
pub mod typegen;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};

use typeport_core::Declaration;

/// Errors that can occur while loading declarations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Go parsing failed with {} errors", .0.error_count())]
    ParseFailed(Diagnostics),

    #[error("invalid declaration JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse a Go file, failing if any error diagnostic was reported.
///
/// Use [`go::parse`] to keep the recovered declarations alongside the
/// diagnostics instead.
pub fn parse(source: &str) -> Result<Vec<Declaration>> {
    let result = go::parse(source);
    if result.diagnostics.has_errors() {
        return Err(Error::ParseFailed(result.diagnostics));
    }
    Ok(result.declarations)
}

/// Load declarations from a JSON array.
pub fn load_json(json: &str) -> Result<Vec<Declaration>> {
    Ok(typeport_core::parse_declarations(json)?)
}

#[cfg(test)]
mod lib_tests;
