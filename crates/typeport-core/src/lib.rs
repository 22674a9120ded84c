#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for Go type syntax.
//!
//! Two layers:
//! - **Type expressions**: [`TypeExpr`], one variant per Go type-syntax node kind
//! - **Declarations**: [`Declaration`], the named type and function
//!   declarations handed to the TypeScript emitter
//!
//! Trees are plain owned values. They can be built by hand, produced by the
//! Go front end in `typeport-lib`, or deserialized from JSON with
//! [`parse_declarations`].

pub mod comments;
pub mod utils;

pub use comments::CommentGroup;

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Expressions
// ============================================================================

/// One node of a Go type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    /// Plain identifier: `int`, `User`, `T`
    Ident { name: String },

    /// Package-qualified name: `time.Time`
    Selector { pkg: String, name: String },

    /// Pointer type: `*T`
    Pointer { elem: Box<TypeExpr> },

    /// Variadic parameter type: `...T`
    Ellipsis { elem: Box<TypeExpr> },

    /// Slice (`len` absent) or array type: `[]T`, `[4]T`, `[...]T`
    Array {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        len: Option<String>,
        elem: Box<TypeExpr>,
    },

    /// Map type: `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },

    /// Channel type: `chan T`, `chan<- T`, `<-chan T`
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<TypeExpr>,
    },

    /// Struct body: `struct { ... }`
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },

    /// Interface body: `interface { ... }`
    ///
    /// Named entries are methods; unnamed entries are embedded types or
    /// constraint unions.
    Interface {
        #[serde(default)]
        methods: Vec<Field>,
    },

    /// Function type: `func(a int) error`
    Func(FuncType),

    /// Parenthesized type: `(T)`
    Paren { inner: Box<TypeExpr> },

    /// Binary expression, used by constraint unions: `int | string`
    Binary {
        x: Box<TypeExpr>,
        op: String,
        y: Box<TypeExpr>,
    },

    /// Unary expression; `~T` marks an underlying-type constraint term.
    Unary { op: String, x: Box<TypeExpr> },

    /// Generic instantiation: `List[T]`, `Pair[K, V]`
    Index {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },

    /// Literal value, kept as written: `42`, `"a"`
    BasicLit {
        #[serde(default)]
        lit: LitKind,
        value: String,
    },

    /// Call expression in type position
    Call {
        fun: Box<TypeExpr>,
        #[serde(default)]
        args: Vec<TypeExpr>,
    },

    /// Composite literal in type position
    CompositeLit {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ty: Option<Box<TypeExpr>>,
    },

    /// Placeholder for syntax that could not be parsed or is not a type
    Bad,
}

/// Channel direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    /// `chan T`
    #[default]
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Recv,
}

/// Basic literal kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LitKind {
    #[default]
    Int,
    Float,
    Imag,
    Char,
    String,
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident { name: name.into() }
    }

    pub fn selector(pkg: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Selector {
            pkg: pkg.into(),
            name: name.into(),
        }
    }

    pub fn pointer(elem: TypeExpr) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn ellipsis(elem: TypeExpr) -> Self {
        Self::Ellipsis {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: TypeExpr) -> Self {
        Self::Array {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Returns `true` for the bare identifier `name`.
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self, Self::Ident { name: n } if n == name)
    }

    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func(_))
    }
}

// ============================================================================
// Fields and Signatures
// ============================================================================

/// Entry of a struct body, interface body, parameter or result list.
///
/// Several names may share one type (`a, b int`). Embedded struct fields,
/// interface type elements and unnamed parameters have no names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentGroup>,
}

impl Field {
    pub fn new(names: Vec<String>, ty: TypeExpr) -> Self {
        Self {
            names,
            ty,
            tag: None,
            doc: None,
            comment: None,
        }
    }

    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self::new(vec![name.into()], ty)
    }

    pub fn unnamed(ty: TypeExpr) -> Self {
        Self::new(Vec::new(), ty)
    }

    pub fn with_doc(mut self, doc: CommentGroup) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn with_comment(mut self, comment: CommentGroup) -> Self {
        self.comment = Some(comment);
        self
    }

    /// First name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(String::as_str).filter(|n| !n.is_empty())
    }

    /// Splits a top-level pointer off the declared type.
    ///
    /// Returns the pointee and `true` for `*T`, the type itself and `false`
    /// otherwise. The field is left untouched.
    pub fn optional_type(&self) -> (&TypeExpr, bool) {
        match &self.ty {
            TypeExpr::Pointer { elem } => (elem, true),
            ty => (ty, false),
        }
    }

    pub fn is_variadic(&self) -> bool {
        matches!(self.ty, TypeExpr::Ellipsis { .. })
    }
}

/// Function signature: parameter and result lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncType {
    #[serde(default)]
    pub params: Vec<Field>,
    #[serde(default)]
    pub results: Vec<Field>,
}

impl FuncType {
    pub fn new(params: Vec<Field>, results: Vec<Field>) -> Self {
        Self { params, results }
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Top-level declaration handed to the emitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum Declaration {
    /// `type Name[T any] ...`
    Type(TypeSpec),
    /// `func Name[T any](...) ...`, receiver-less only
    Func(FuncDecl),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Type(spec) => &spec.name,
            Self::Func(decl) => &decl.name,
        }
    }

    pub fn doc(&self) -> Option<&CommentGroup> {
        match self {
            Self::Type(spec) => spec.doc.as_ref(),
            Self::Func(decl) => decl.doc.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<Field>,
    /// `type A = B` rather than `type A B`
    #[serde(default)]
    pub alias: bool,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<CommentGroup>,
}

impl TypeSpec {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            alias: false,
            ty,
            doc: None,
            comment: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    #[serde(default)]
    pub type_params: Vec<Field>,
    pub signature: FuncType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<CommentGroup>,
}

/// Parse a JSON array of declarations.
pub fn parse_declarations(json: &str) -> Result<Vec<Declaration>, serde_json::Error> {
    serde_json::from_str(json)
}
