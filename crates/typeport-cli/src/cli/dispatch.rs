//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::expr::ExprArgs;
use crate::commands::generate::GenArgs;

pub struct GenParams {
    pub files: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub mappings: Vec<(String, String)>,
    pub indent: Option<String>,
    pub start_modifier: Option<String>,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let start_modifier = if m.get_flag("export") {
            Some("export".to_string())
        } else if m.get_flag("declare") {
            Some("declare".to_string())
        } else {
            None
        };

        Self {
            files: get_files(m),
            config: m.get_one::<PathBuf>("config").cloned(),
            mappings: get_mappings(m),
            indent: m.get_one::<String>("indent").cloned(),
            start_modifier,
            json: m.get_flag("json"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            files: p.files,
            config: p.config,
            mappings: p.mappings,
            indent: p.indent,
            start_modifier: p.start_modifier,
            json: p.json,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub files: Vec<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: get_files(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            files: p.files,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExprParams {
    pub type_text: String,
    pub mappings: Vec<(String, String)>,
    pub color: ColorChoice,
}

impl ExprParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            type_text: m
                .get_one::<String>("type_text")
                .cloned()
                .unwrap_or_default(),
            mappings: get_mappings(m),
            color: parse_color(m),
        }
    }
}

impl From<ExprParams> for ExprArgs {
    fn from(p: ExprParams) -> Self {
        Self {
            type_text: p.type_text,
            mappings: p.mappings,
            color: p.color.should_colorize(),
        }
    }
}

fn get_files(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("files")
        .map(|files| files.cloned().collect())
        .unwrap_or_default()
}

fn get_mappings(m: &ArgMatches) -> Vec<(String, String)> {
    m.get_many::<(String, String)>("map")
        .map(|pairs| pairs.cloned().collect())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
