//! Top-level declarations and the per-run generator.

use typeport_core::{Declaration, FuncDecl, TypeExpr, TypeSpec};

use super::emitter::WriteOptions;
use super::{Config, Emitter, UnknownTypes};

impl Emitter<'_> {
    /// Writes one top-level declaration, terminated by a newline.
    pub fn emit_declaration(&mut self, decl: &Declaration) {
        match decl {
            Declaration::Type(spec) => self.emit_type_spec(spec),
            Declaration::Func(func) => self.emit_func_decl(func),
        }
    }

    fn emit_type_spec(&mut self, spec: &TypeSpec) {
        self.write_doc(spec.doc.as_ref(), 0);
        self.write_start_modifier(0);

        match &spec.ty {
            TypeExpr::Struct { fields } => {
                self.write_interface_header(spec);
                self.write_struct_fields(fields, 0);
                self.output.push_str("}\n");
            }
            TypeExpr::Interface { methods } => {
                self.write_interface_header(spec);
                self.write_interface_methods(methods, 0);
                self.output.push_str("}\n");
            }
            TypeExpr::Func(sig) => {
                // Call signature, so the type stays declaration-mergeable.
                self.write_interface_header(spec);
                self.write_indent(1);
                self.write_func_type(sig, 0, false);
                self.output.push_str("\n}\n");
            }
            ty => {
                self.output.push_str("type ");
                self.output.push_str(&spec.name);
                self.write_type_params(&spec.type_params);
                self.output.push_str(" = ");
                self.write_type(ty, 0, WriteOptions::NONE);
                self.output.push('\n');
            }
        }
    }

    fn write_interface_header(&mut self, spec: &TypeSpec) {
        self.output.push_str("interface ");
        self.output.push_str(&spec.name);
        self.write_type_params(&spec.type_params);
        self.output.push_str(" {\n");
    }

    fn emit_func_decl(&mut self, func: &FuncDecl) {
        self.write_doc(func.doc.as_ref(), 0);
        self.write_start_modifier(0);
        self.output.push_str("function ");
        self.output.push_str(&func.name);
        self.write_type_params(&func.type_params);
        self.write_func_type(&func.signature, 0, false);
        self.output.push('\n');
    }
}

/// One generation run: shared configuration plus the unknown-type set that
/// all emissions of the run record into.
#[derive(Debug, Default)]
pub struct Generator {
    config: Config,
    unknown: UnknownTypes,
}

impl Generator {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            unknown: UnknownTypes::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// TypeScript for one declaration.
    pub fn emit_declaration(&mut self, decl: &Declaration) -> String {
        let mut emitter = Emitter::new(&self.config, &mut self.unknown);
        emitter.emit_declaration(decl);
        emitter.finish()
    }

    /// TypeScript for one type expression at depth 0.
    pub fn emit_type(&mut self, ty: &TypeExpr, options: WriteOptions) -> String {
        let mut emitter = Emitter::new(&self.config, &mut self.unknown);
        emitter.write_type(ty, 0, options);
        emitter.finish()
    }

    /// Declarations in order, separated by blank lines.
    pub fn emit_all<'d>(&mut self, decls: impl IntoIterator<Item = &'d Declaration>) -> String {
        let mut emitter = Emitter::new(&self.config, &mut self.unknown);
        for (i, decl) in decls.into_iter().enumerate() {
            if i > 0 {
                emitter.output.push('\n');
            }
            emitter.emit_declaration(decl);
        }
        emitter.finish()
    }

    pub fn unknown_types(&self) -> &UnknownTypes {
        &self.unknown
    }

    pub fn into_unknown_types(self) -> UnknownTypes {
        self.unknown
    }
}

/// Emit a single type expression with its own unknown-type set.
pub fn emit_type(ty: &TypeExpr, config: &Config) -> (String, UnknownTypes) {
    let mut generator = Generator::new(config.clone());
    let output = generator.emit_type(ty, WriteOptions::NONE);
    (output, generator.into_unknown_types())
}

/// Emit declarations with their own unknown-type set.
pub fn emit_declarations(decls: &[Declaration], config: &Config) -> (String, UnknownTypes) {
    let mut generator = Generator::new(config.clone());
    let output = generator.emit_all(decls);
    (output, generator.into_unknown_types())
}
