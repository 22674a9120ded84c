//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input files (positional, one or more). `-` reads stdin.
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Go source or JSON declaration files (- for stdin)")
}

/// Inline Go type expression (positional).
pub fn type_text_arg() -> Arg {
    Arg::new("type_text")
        .value_name("TYPE")
        .required(true)
        .help("Go type expression, e.g. 'map[string][]*User'")
}

/// JSON config file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("CONFIG")
        .value_parser(value_parser!(PathBuf))
        .help("JSON config file")
}

/// Type mapping override (--map NAME=TS), repeatable.
pub fn map_arg() -> Arg {
    Arg::new("map")
        .long("map")
        .value_name("NAME=TS")
        .action(ArgAction::Append)
        .value_parser(parse_mapping)
        .help("Map a Go type (Name, pkg.Name or pkg.*) to TypeScript text")
}

/// Indentation string (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("STRING")
        .help("Indentation unit (default: two spaces)")
}

/// Prefix declarations with `export` (--export).
pub fn export_arg() -> Arg {
    Arg::new("export")
        .long("export")
        .action(ArgAction::SetTrue)
        .conflicts_with("declare")
        .help("Prefix declarations with `export`")
}

/// Prefix declarations with `declare` (--declare).
pub fn declare_arg() -> Arg {
    Arg::new("declare")
        .long("declare")
        .action(ArgAction::SetTrue)
        .help("Prefix declarations with `declare`")
}

/// Treat every input as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Read inputs as JSON declarations regardless of extension")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Log verbosity (-v, -vv), global.
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v debug, -vv trace)")
}

/// Splits `NAME=TS` at the first `=`.
pub fn parse_mapping(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, ts)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), ts.trim().to_string()))
        }
        _ => Err(format!("expected NAME=TS, got `{s}`")),
    }
}
