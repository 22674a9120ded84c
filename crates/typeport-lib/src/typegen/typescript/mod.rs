//! TypeScript emitter for Go type syntax.
//!
//! Translates [`TypeExpr`](typeport_core::TypeExpr) trees and declarations
//! into TypeScript declarations for scripts running in an embedding runtime
//! such as goja. Translation never fails: unresolvable nodes degrade to
//! `any` or `undefined`, and unresolved names are collected in
//! [`UnknownTypes`] for the caller.

mod config;
mod declaration;
mod emitter;
mod expr;
mod fields;
mod identifiers;
mod signature;
mod unknown;

pub use config::{CaseStyle, Config, NameFormatter, TypeMapper, TypeMappings};
pub use declaration::{Generator, emit_declarations, emit_type};
pub use emitter::{Emitter, WriteOptions};
pub use expr::{DICT_TYPE, builtin_type};
pub use identifiers::{is_exported, is_reserved_identifier, is_valid_identifier, property_name};
pub use unknown::UnknownTypes;

/// Definition of the map placeholder type.
pub const DICT_TYPE_DECL: &str = "type _TygojaDict = { [key:string | number | symbol]: any; }";

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod fields_tests;
