//! Configuration types for TypeScript emission.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use typeport_core::utils::{lower_first, to_camel_case, to_pascal_case, to_snake_case};

/// Rewrites member names before they are emitted.
///
/// Implemented for [`CaseStyle`] and for any `Fn(&str) -> String`.
pub trait NameFormatter: Send + Sync {
    fn format_name(&self, name: &str) -> String;
}

impl<F> NameFormatter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn format_name(&self, name: &str) -> String {
        self(name)
    }
}

/// Resolves a Go type name (`Name`, `pkg.Name` or `pkg.*`) to literal
/// TypeScript text. Consulted before the built-in rules.
///
/// Implemented for [`TypeMappings`] and for any `Fn(&str) -> Option<String>`.
pub trait TypeMapper: Send + Sync {
    fn map_type(&self, name: &str) -> Option<String>;
}

impl<F> TypeMapper for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn map_type(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Built-in member name formatters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// Names are kept as declared
    #[default]
    Unchanged,
    /// `UserID` → `userID`
    LowerFirst,
    /// `UserID` → `userID`, `HTTPServer` → `httpServer`
    CamelCase,
    /// `UserID` → `user_id`
    SnakeCase,
    /// `user_id` → `UserId`
    PascalCase,
}

impl NameFormatter for CaseStyle {
    fn format_name(&self, name: &str) -> String {
        match self {
            CaseStyle::Unchanged => name.to_string(),
            CaseStyle::LowerFirst => lower_first(name),
            CaseStyle::CamelCase => to_camel_case(name),
            CaseStyle::SnakeCase => to_snake_case(name),
            CaseStyle::PascalCase => to_pascal_case(name),
        }
    }
}

impl std::str::FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unchanged" => Ok(CaseStyle::Unchanged),
            "lower_first" | "lower-first" => Ok(CaseStyle::LowerFirst),
            "camel_case" | "camel-case" | "camel" => Ok(CaseStyle::CamelCase),
            "snake_case" | "snake-case" | "snake" => Ok(CaseStyle::SnakeCase),
            "pascal_case" | "pascal-case" | "pascal" => Ok(CaseStyle::PascalCase),
            _ => Err(format!("unknown case style `{s}`")),
        }
    }
}

/// Name → replacement table, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMappings(IndexMap<String, String>);

impl TypeMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, ts: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), ts.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries of `other` override entries of `self`.
    pub fn extend(&mut self, other: TypeMappings) {
        self.0.extend(other.0);
    }
}

impl TypeMapper for TypeMappings {
    fn map_type(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeMappings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Configuration for TypeScript emission.
#[derive(Clone)]
pub struct Config {
    /// One level of indentation
    pub(crate) indent: String,
    /// Written before each top-level declaration, e.g. `export`
    pub(crate) start_modifier: Option<String>,
    pub(crate) type_mapper: Arc<dyn TypeMapper>,
    pub(crate) field_name_formatter: Option<Arc<dyn NameFormatter>>,
    pub(crate) method_name_formatter: Option<Arc<dyn NameFormatter>>,
    /// Nesting limit for type expressions
    pub(crate) max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            start_modifier: None,
            type_mapper: Arc::new(TypeMappings::default()),
            field_name_formatter: None,
            method_name_formatter: None,
            max_depth: 128,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("indent", &self.indent)
            .field("start_modifier", &self.start_modifier)
            .field("field_name_formatter", &self.field_name_formatter.is_some())
            .field("method_name_formatter", &self.method_name_formatter.is_some())
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string written once per indentation level.
    pub fn indent(mut self, value: impl Into<String>) -> Self {
        self.indent = value.into();
        self
    }

    /// Set the modifier written before top-level declarations.
    /// An empty string clears it.
    pub fn start_modifier(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.start_modifier = (!value.is_empty()).then_some(value);
        self
    }

    /// Resolve type names through a mapping table.
    pub fn type_mappings(self, mappings: TypeMappings) -> Self {
        self.type_mapper(mappings)
    }

    /// Resolve type names through any mapper.
    pub fn type_mapper(mut self, mapper: impl TypeMapper + 'static) -> Self {
        self.type_mapper = Arc::new(mapper);
        self
    }

    /// Rename struct members.
    pub fn field_name_formatter(mut self, formatter: impl NameFormatter + 'static) -> Self {
        self.field_name_formatter = Some(Arc::new(formatter));
        self
    }

    /// Rename interface methods.
    pub fn method_name_formatter(mut self, formatter: impl NameFormatter + 'static) -> Self {
        self.method_name_formatter = Some(Arc::new(formatter));
        self
    }

    /// Set the nesting limit past which types degrade to `any`.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    pub(crate) fn map_type(&self, name: &str) -> Option<String> {
        self.type_mapper.map_type(name)
    }

    pub(crate) fn format_field_name(&self, name: &str) -> String {
        match &self.field_name_formatter {
            Some(formatter) => formatter.format_name(name),
            None => name.to_string(),
        }
    }

    pub(crate) fn format_method_name(&self, name: &str) -> String {
        match &self.method_name_formatter {
            Some(formatter) => formatter.format_name(name),
            None => name.to_string(),
        }
    }
}
