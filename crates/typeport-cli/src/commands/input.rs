//! Reading input files into declarations.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use typeport_core::Declaration;
use typeport_lib::Diagnostics;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("{path}: {source}")]
    Load {
        path: String,
        source: typeport_lib::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Go,
    Json,
}

impl InputFormat {
    /// `.json` files are JSON declarations; everything else is Go.
    pub fn detect(path: &Path, force_json: bool) -> Self {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if force_json || is_json {
            InputFormat::Json
        } else {
            InputFormat::Go
        }
    }
}

/// One input file after parsing. Go files may carry diagnostics.
pub struct LoadedFile {
    pub path: PathBuf,
    pub source: String,
    pub declarations: Vec<Declaration>,
    pub diagnostics: Diagnostics,
}

impl LoadedFile {
    pub fn display_path(&self) -> String {
        display_path(&self.path)
    }
}

pub fn read_source(path: &Path) -> Result<String, InputError> {
    let read_err = |source| InputError::Read {
        path: display_path(path),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}

pub fn load(path: &Path, force_json: bool) -> Result<LoadedFile, InputError> {
    let source = read_source(path)?;
    load_source(path, source, InputFormat::detect(path, force_json))
}

pub fn load_source(
    path: &Path,
    source: String,
    format: InputFormat,
) -> Result<LoadedFile, InputError> {
    let (declarations, diagnostics) = match format {
        InputFormat::Json => {
            let declarations =
                typeport_lib::load_json(&source).map_err(|source| InputError::Load {
                    path: display_path(path),
                    source,
                })?;
            (declarations, Diagnostics::new())
        }
        InputFormat::Go => {
            let result = typeport_lib::go::parse(&source);
            log::debug!(
                "{}: {} declarations, {} diagnostics",
                display_path(path),
                result.declarations.len(),
                result.diagnostics.len()
            );
            (result.declarations, result.diagnostics)
        }
    };

    Ok(LoadedFile {
        path: path.to_path_buf(),
        source,
        declarations,
        diagnostics,
    })
}

/// Renders the diagnostics of `file` with its path as the snippet origin.
pub fn render_diagnostics(file: &LoadedFile, colored: bool) -> String {
    let path = file.display_path();
    file.diagnostics
        .printer(&file.source)
        .path(&path)
        .colored(colored)
        .render()
}

fn display_path(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
