//! Which names can appear bare in TypeScript output.

use std::sync::LazyLock;

use regex_automata::meta::Regex;

/// ES5 keywords and future reserved words.
const RESERVED_IDENTIFIERS: &[&str] = &[
    "break",
    "do",
    "instanceof",
    "typeof",
    "case",
    "else",
    "new",
    "var",
    "catch",
    "finally",
    "return",
    "void",
    "continue",
    "for",
    "switch",
    "while",
    "debugger",
    "function",
    "this",
    "with",
    "default",
    "if",
    "throw",
    "delete",
    "in",
    "try",
    "class",
    "enum",
    "extends",
    "super",
    "const",
    "export",
    "import",
    "implements",
    "let",
    "private",
    "public",
    "yield",
    "interface",
    "package",
    "protected",
    "static",
];

static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\pL_][\pL\pN_]*$").expect("identifier pattern is valid")
});

pub fn is_reserved_identifier(name: &str) -> bool {
    RESERVED_IDENTIFIERS.contains(&name)
}

/// Whether `name` can be written unquoted as a property key.
///
/// Reserved words count as valid: they are legal property names.
pub fn is_valid_identifier(name: &str) -> bool {
    is_reserved_identifier(name) || IDENTIFIER.is_match(name)
}

/// Property key for `name`, single-quoted when it is not a valid identifier.
pub fn property_name(name: &str) -> String {
    if is_valid_identifier(name) {
        return name.to_string();
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('\'');
    for c in name.chars() {
        if matches!(c, '\'' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

/// Go-style export check: the first byte is an ASCII uppercase letter.
pub fn is_exported(name: &str) -> bool {
    name.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
}
