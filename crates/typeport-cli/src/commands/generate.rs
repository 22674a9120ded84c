use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use typeport_lib::typegen::typescript::{DICT_TYPE_DECL, Generator, UnknownTypes};

use super::config_file::FileConfig;
use super::input::{self, render_diagnostics};

pub struct GenArgs {
    pub files: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub mappings: Vec<(String, String)>,
    pub indent: Option<String>,
    pub start_modifier: Option<String>,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: GenArgs) {
    let mut file_config = match &args.config {
        Some(path) => FileConfig::load(path).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }),
        None => FileConfig::default(),
    };
    file_config.apply_flags(
        &args.mappings,
        args.indent.as_deref(),
        args.start_modifier.as_deref(),
    );

    let mut generator = Generator::new(file_config.to_config());
    let mut sections: Vec<String> = Vec::new();
    if let Some(heading) = &file_config.heading {
        sections.push(heading.trim_end().to_string() + "\n");
    }
    if file_config.dict_type {
        sections.push(format!("{DICT_TYPE_DECL}\n"));
    }

    for path in &args.files {
        let file = input::load(path, args.json).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

        if !file.diagnostics.is_empty() {
            eprint!("{}", render_diagnostics(&file, args.color));
        }
        if file.diagnostics.has_errors() {
            std::process::exit(1);
        }

        if file.declarations.is_empty() {
            log::debug!("{}: no declarations", file.display_path());
            continue;
        }
        sections.push(generator.emit_all(&file.declarations));
    }

    let output = sections.join("\n");

    if let Some(ref path) = args.output {
        fs::write(path, &output).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        });
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }

    report_unknown_types(generator.unknown_types());
}

/// Lists unresolved names on stderr so they can be mapped or declared.
pub fn report_unknown_types(unknown: &UnknownTypes) {
    if unknown.is_empty() {
        return;
    }
    eprintln!("warning: {} unresolved type(s):", unknown.len());
    for name in unknown.iter() {
        eprintln!("  {}", name);
    }
}
