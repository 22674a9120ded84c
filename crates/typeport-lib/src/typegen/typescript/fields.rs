//! Struct and interface bodies.

use typeport_core::{Field, TypeExpr};

use super::Emitter;
use super::emitter::WriteOptions;
use super::identifiers::{is_exported, property_name};

impl Emitter<'_> {
    /// Writes struct members at `depth + 1`.
    ///
    /// Only the first name of a field is used. Unexported and embedded
    /// fields are skipped. A top-level pointer makes the member optional.
    pub fn write_struct_fields(&mut self, fields: &[Field], depth: usize) {
        for field in fields {
            let Some(name) = field.name().filter(|n| is_exported(n)) else {
                continue;
            };
            let name = self.config.format_field_name(name);

            self.write_doc(field.doc.as_ref(), depth + 1);
            self.write_indent(depth + 1);
            self.output.push_str(&property_name(&name));

            let (ty, optional) = field.optional_type();
            if optional {
                self.output.push('?');
            }
            self.output.push_str(": ");
            self.write_type(ty, depth, WriteOptions::PARENTHESIS);
            self.end_member_line(field.comment.as_ref());
        }
    }

    /// Writes interface methods at `depth + 1`.
    ///
    /// Embedded interfaces and constraint elements have no name and are
    /// skipped along with unexported methods.
    pub fn write_interface_methods(&mut self, methods: &[Field], depth: usize) {
        for method in methods {
            let Some(name) = method.name().filter(|n| is_exported(n)) else {
                continue;
            };
            let name = self.config.format_method_name(name);

            self.write_doc(method.doc.as_ref(), depth + 1);
            self.write_indent(depth + 1);
            self.output.push_str(&property_name(&name));

            match &method.ty {
                TypeExpr::Func(sig) => self.write_func_type(sig, depth, false),
                ty => {
                    self.output.push_str(": ");
                    self.write_type(ty, depth, WriteOptions::PARENTHESIS);
                }
            }
            self.end_member_line(method.comment.as_ref());
        }
    }
}
