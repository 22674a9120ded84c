//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeport")
        .about("TypeScript declarations from Go types")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(gen_command())
        .subcommand(check_command())
        .subcommand(expr_command())
}

/// Generate TypeScript declarations.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate TypeScript declarations from Go files")
        .override_usage(
            "\
  typeport gen <FILE>... [-c <CONFIG>] [-o <FILE>]
  typeport gen --json <FILE>...",
        )
        .after_help(
            r#"EXAMPLES:
  typeport gen models.go                        # print to stdout
  typeport gen a.go b.go -o types.d.ts          # several files, one output
  typeport gen models.go --map time.Time=Date   # override a type
  typeport gen models.go -c typeport.json       # settings from a config file
  typeport gen --json decls.json --export       # JSON declarations"#,
        )
        .arg(files_arg())
        .arg(config_arg())
        .arg(map_arg())
        .arg(indent_arg())
        .arg(export_arg())
        .arg(declare_arg())
        .arg(json_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// Parse Go files and report diagnostics.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Parse Go files and report diagnostics")
        .after_help(
            r#"EXAMPLES:
  typeport check models.go            # silent on success
  typeport check *.go --strict        # warnings fail too"#,
        )
        .arg(files_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Translate a single type expression.
pub fn expr_command() -> Command {
    Command::new("expr")
        .about("Translate a single Go type expression")
        .after_help(
            r#"EXAMPLES:
  typeport expr '[]byte'                          # string|Array<number>
  typeport expr 'func(ctx context.Context) error' --map 'context.*=any'"#,
        )
        .arg(type_text_arg())
        .arg(map_arg())
        .arg(color_arg())
}
