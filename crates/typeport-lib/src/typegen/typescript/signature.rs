//! Function signatures and type parameter lists.
//!
//! Results follow the runtime's calling convention: a trailing `error` result
//! becomes an exception and is not part of the return type, several results
//! come back as an array, and a lone result is returned as is.

use typeport_core::{Field, FuncType, TypeExpr};

use super::Emitter;
use super::emitter::{WriteOptions, comment_text};
use super::identifiers::is_reserved_identifier;

impl Emitter<'_> {
    /// Writes `(params): result`, or `(params) => result` when `arrow` is set.
    pub fn write_func_type(&mut self, sig: &FuncType, depth: usize, arrow: bool) {
        self.output.push('(');
        self.write_func_params(&sig.params, depth);
        self.output.push_str(if arrow { ") => " } else { "): " });
        self.write_func_results(&sig.results, depth);
    }

    fn write_func_results(&mut self, results: &[Field], depth: usize) {
        let results = match results.split_last() {
            Some((last, rest)) if last.ty.is_ident("error") => rest,
            _ => results,
        };
        if results.is_empty() {
            self.output.push_str("void");
            return;
        }

        // `(a, b int)` is one field with two names but still two values.
        let multiple = results.len() > 1 || results[0].names.len() > 1;
        if multiple {
            self.output.push('[');
        }
        let mut first = true;
        for field in results {
            for _ in 0..field.names.len().max(1) {
                if !first {
                    self.output.push_str(", ");
                }
                first = false;
                self.write_type(
                    &field.ty,
                    depth,
                    WriteOptions::PARENTHESIS | WriteOptions::FUNCTION_RETURN,
                );
            }
        }
        if multiple {
            self.output.push(']');
        }
    }

    /// Writes `name: Type` entries separated by `, `.
    ///
    /// Grouped names expand to one entry each. Missing or reserved names are
    /// replaced with `_arg{i}{j}`, unnamed groups get `_arg{i}`.
    pub fn write_func_params(&mut self, params: &[Field], depth: usize) {
        let mut first = true;
        for (i, param) in params.iter().enumerate() {
            let names = param_names(i, param);

            let (ty, variadic) = match &param.ty {
                TypeExpr::Pointer { elem } => (elem.as_ref(), false),
                ty => (ty, param.is_variadic()),
            };
            let comment = param.comment.as_ref().map(comment_text);

            for name in names {
                if !first {
                    self.output.push_str(", ");
                }
                first = false;

                if variadic {
                    self.output.push_str("...");
                }
                self.output.push_str(&name);
                self.output.push_str(": ");
                self.write_type(ty, depth, WriteOptions::PARENTHESIS);

                if let Some(text) = comment.as_deref().filter(|t| !t.is_empty()) {
                    self.output.push_str(" /* ");
                    self.output.push_str(&text.replace("*/", "*\\/"));
                    self.output.push_str(" */ ");
                }
            }
        }
    }

    /// Writes `<A,B>` for the names of `type_params`; nothing when there are none.
    ///
    /// Constraints are dropped.
    pub fn write_type_params(&mut self, type_params: &[Field]) {
        let names: Vec<&str> = type_params
            .iter()
            .flat_map(|field| field.names.iter().map(String::as_str))
            .collect();
        if names.is_empty() {
            return;
        }
        self.output.push('<');
        self.output.push_str(&names.join(","));
        self.output.push('>');
    }
}

fn param_names(index: usize, param: &Field) -> Vec<String> {
    if param.names.is_empty() {
        return vec![format!("_arg{index}")];
    }
    param
        .names
        .iter()
        .enumerate()
        .map(|(j, name)| {
            if name.is_empty() || is_reserved_identifier(name) {
                format!("_arg{index}{j}")
            } else {
                name.clone()
            }
        })
        .collect()
}
