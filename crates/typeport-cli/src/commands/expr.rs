use typeport_lib::go::parse_type_expr;
use typeport_lib::typegen::typescript::{Config, Generator, TypeMappings, WriteOptions};

use super::generate::report_unknown_types;

pub struct ExprArgs {
    pub type_text: String,
    pub mappings: Vec<(String, String)>,
    pub color: bool,
}

pub fn run(args: ExprArgs) {
    let (ty, diagnostics) = parse_type_expr(&args.type_text);
    if !diagnostics.is_empty() {
        eprint!(
            "{}",
            diagnostics
                .printer(&args.type_text)
                .colored(args.color)
                .render()
        );
    }
    if diagnostics.has_errors() {
        std::process::exit(1);
    }

    let mappings: TypeMappings = args.mappings.into_iter().collect();
    let mut generator = Generator::new(Config::new().type_mappings(mappings));
    println!("{}", generator.emit_type(&ty, WriteOptions::NONE));

    report_unknown_types(generator.unknown_types());
}
