//! JSON configuration file for `typeport gen`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use typeport_lib::typegen::typescript::{CaseStyle, Config, TypeMappings};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Settings read from `-c/--config`. Command-line flags override them.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub indent: Option<String>,
    pub start_modifier: Option<String>,
    pub type_mappings: TypeMappings,
    pub field_names: CaseStyle,
    pub method_names: CaseStyle,
    /// Written verbatim before the declarations
    pub heading: Option<String>,
    /// Emit the `_TygojaDict` definition
    pub dict_type: bool,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Applies command-line overrides.
    pub fn apply_flags(
        &mut self,
        mappings: &[(String, String)],
        indent: Option<&str>,
        start_modifier: Option<&str>,
    ) {
        for (name, ts) in mappings {
            self.type_mappings.insert(name.as_str(), ts.as_str());
        }
        if let Some(indent) = indent {
            self.indent = Some(indent.to_string());
        }
        if let Some(modifier) = start_modifier {
            self.start_modifier = Some(modifier.to_string());
        }
    }

    pub fn to_config(&self) -> Config {
        let mut config = Config::new().type_mappings(self.type_mappings.clone());
        if let Some(indent) = &self.indent {
            config = config.indent(indent.as_str());
        }
        if let Some(modifier) = &self.start_modifier {
            config = config.start_modifier(modifier.as_str());
        }
        if self.field_names != CaseStyle::Unchanged {
            config = config.field_name_formatter(self.field_names);
        }
        if self.method_names != CaseStyle::Unchanged {
            config = config.method_name_formatter(self.method_names);
        }
        config
    }
}
