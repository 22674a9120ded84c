use std::path::PathBuf;

use super::input::{self, render_diagnostics};

pub struct CheckArgs {
    pub files: Vec<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let mut failed = false;

    for path in &args.files {
        let file = input::load(path, false).unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });

        let diagnostics = &file.diagnostics;
        let is_valid = if args.strict {
            !diagnostics.has_errors() && !diagnostics.has_warnings()
        } else {
            !diagnostics.has_errors()
        };

        if !diagnostics.is_empty() {
            eprint!("{}", render_diagnostics(&file, args.color));
        }
        failed |= !is_valid;
    }

    if failed {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
