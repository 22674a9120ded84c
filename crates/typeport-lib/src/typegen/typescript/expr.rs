//! Type expression translation.

use typeport_core::TypeExpr;

use super::Emitter;
use super::emitter::WriteOptions;

/// Placeholder for Go maps.
pub const DICT_TYPE: &str = "_TygojaDict";

/// TypeScript name for a predeclared Go identifier.
pub fn builtin_type(name: &str) -> Option<&'static str> {
    let ts = match name {
        "string" => "string",
        "bool" => "boolean",
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" | "float32" | "float64" | "complex64" | "complex128" | "uintptr" | "byte"
        | "rune" => "number",
        "error" => "Error",
        _ => return None,
    };
    Some(ts)
}

impl Emitter<'_> {
    /// Appends the TypeScript form of `ty`.
    ///
    /// `depth` is the indentation level of the enclosing member; struct and
    /// interface bodies open at `depth + 1`.
    pub fn write_type(&mut self, ty: &TypeExpr, depth: usize, options: WriteOptions) {
        if self.nesting >= self.config.max_depth {
            log::warn!(
                "type nesting exceeds {} levels; emitting `any`",
                self.config.max_depth
            );
            self.output.push_str("any");
            return;
        }

        self.nesting += 1;
        self.write_type_inner(ty, depth, options);
        self.nesting -= 1;
    }

    fn write_type_inner(&mut self, ty: &TypeExpr, depth: usize, options: WriteOptions) {
        match ty {
            TypeExpr::Pointer { elem } => {
                if options.parenthesis {
                    self.output.push('(');
                }
                self.write_type(elem, depth, WriteOptions::NONE);
                if !options.extends && !options.function_return {
                    self.output.push_str(" | undefined");
                }
                if options.parenthesis {
                    self.output.push(')');
                }
            }
            TypeExpr::Ellipsis { elem } => {
                if elem.is_ident("byte") {
                    self.output.push_str("string");
                    return;
                }
                // `...callbacks: (() => number)[]`
                let is_func = elem.is_func();
                if is_func {
                    self.output.push('(');
                }
                self.write_type(elem, depth, WriteOptions::PARENTHESIS);
                if is_func {
                    self.output.push(')');
                }
                self.output.push_str("[]");
            }
            TypeExpr::Array { elem, .. } => {
                // The runtime accepts strings wherever byte slices are expected.
                if elem.is_ident("byte") && !options.extends {
                    self.output.push_str("string|");
                }
                self.output.push_str("Array<");
                self.write_type(elem, depth, WriteOptions::PARENTHESIS);
                self.output.push('>');
            }
            TypeExpr::Struct { fields } => {
                self.output.push_str("{\n");
                self.write_struct_fields(fields, depth + 1);
                self.write_indent(depth + 1);
                self.output.push('}');
            }
            TypeExpr::Interface { methods } => {
                self.output.push_str("{\n");
                self.write_interface_methods(methods, depth + 1);
                self.write_indent(depth + 1);
                self.output.push('}');
            }
            TypeExpr::Ident { name } => self.write_ident(name),
            TypeExpr::Selector { pkg, name } => self.write_selector(pkg, name),
            TypeExpr::Map { .. } => self.output.push_str(DICT_TYPE),
            TypeExpr::BasicLit { value, .. } => self.output.push_str(value),
            TypeExpr::Paren { inner } => {
                self.output.push('(');
                self.write_type(inner, depth, WriteOptions::NONE);
                self.output.push(')');
            }
            TypeExpr::Binary { x, op, y } => {
                self.write_type(x, depth, WriteOptions::NONE);
                self.output.push(' ');
                self.output.push_str(op);
                self.output.push(' ');
                self.write_type(y, depth, WriteOptions::NONE);
            }
            TypeExpr::Func(sig) => self.write_func_type(sig, depth, options.parenthesis),
            TypeExpr::Unary { op, x } => {
                // TypeScript has no underlying-type constraint; `~T` becomes `T`.
                if op == "~" {
                    self.write_type(x, depth, WriteOptions::NONE);
                } else {
                    log::warn!("unhandled unary operator `{op}` in type expression");
                }
            }
            TypeExpr::Index { base, args } => {
                self.write_type(base, depth, WriteOptions::NONE);
                self.output.push('<');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.output.push_str(", ");
                    }
                    self.write_type(arg, depth, WriteOptions::NONE);
                }
                self.output.push('>');
            }
            TypeExpr::Call { .. } | TypeExpr::Chan { .. } | TypeExpr::CompositeLit { .. } => {
                self.output.push_str("undefined");
            }
            TypeExpr::Bad => self.output.push_str("any"),
        }
    }

    fn write_ident(&mut self, name: &str) {
        if let Some(mapped) = self.config.map_type(name) {
            self.output.push_str(&mapped);
            return;
        }
        match builtin_type(name) {
            Some(ts) => self.output.push_str(ts),
            None => {
                self.unknown.record(name);
                self.output.push_str(name);
            }
        }
    }

    fn write_selector(&mut self, pkg: &str, name: &str) {
        let full = format!("{pkg}.{name}");
        let mapped = self
            .config
            .map_type(&full)
            .or_else(|| self.config.map_type(&format!("{pkg}.*")));
        match mapped {
            Some(ts) => self.output.push_str(&ts),
            None => {
                self.output.push_str(&full);
                self.unknown.record(full);
            }
        }
    }
}
